//! End-to-end pipeline scenarios with concrete, externally verified byte
//! images.

use blocksync::{apply, diff, prepare, prepare_default, DeltaScript, Error, DEFAULT_BLOCK_SIZE};

fn ascending(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 256) as u8).collect()
}

#[test]
fn three_block_signature_table_is_68_bytes() {
    let table = prepare(&ascending(48), 16).unwrap();
    assert_eq!(table.len(), 8 + 3 * 20);
}

#[test]
fn single_byte_change_in_block_two() {
    let base = ascending(48);
    let table = prepare(&base, 16).unwrap();

    let mut target = base.clone();
    target[16] = 0;
    let stream = diff(&target, &table).unwrap();

    let script = DeltaScript::parse(&stream).unwrap();
    assert_eq!(script.block_size, 16);
    assert_eq!(script.matched_blocks, vec![1, 3]);
    assert_eq!(script.patches.len(), 1);
    assert_eq!(script.patches[0].anchor, 1);
    assert_eq!(script.patches[0].data.len(), 16);

    assert_eq!(apply(&base, &stream).unwrap(), target);
}

#[test]
fn empty_base_default_block_size() {
    let table = prepare_default(&[]).unwrap();
    assert_eq!(table.len(), 8);
    assert_eq!(&table[..4], &DEFAULT_BLOCK_SIZE.to_le_bytes());
    assert_eq!(&table[4..], &0u32.to_le_bytes());

    let candidate = ascending(3000);
    let stream = diff(&candidate, &table).unwrap();
    let script = DeltaScript::parse(&stream).unwrap();
    assert!(script.matched_blocks.is_empty());
    assert_eq!(script.patches.len(), 1);
    assert_eq!(script.patches[0].anchor, 0);
    assert_eq!(script.patches[0].data, &candidate[..]);

    assert_eq!(apply(&[], &stream).unwrap(), candidate);
}

#[test]
fn candidate_shorter_than_base_last_block() {
    // The base's trailing partial block must still be matchable by a
    // candidate that ends even earlier.
    let base = ascending(38);
    let table = prepare(&base, 16).unwrap();

    let mut target = base[..16].to_vec();
    target.extend_from_slice(&base[32..]);
    let stream = diff(&target, &table).unwrap();

    let script = DeltaScript::parse(&stream).unwrap();
    assert_eq!(script.matched_blocks, vec![1, 3]);
    assert!(script.patches.is_empty());

    assert_eq!(apply(&base, &stream).unwrap(), target);
}

#[test]
fn growing_a_file_by_one_block() {
    let base = ascending(48);
    let target = ascending(64);

    let table = prepare(&base, 16).unwrap();
    let stream = diff(&target, &table).unwrap();
    assert_eq!(apply(&base, &stream).unwrap(), target);
}

#[test]
fn shrinking_a_file_to_a_prefix() {
    let base = ascending(64);
    let target = ascending(40);

    let table = prepare(&base, 16).unwrap();
    let stream = diff(&target, &table).unwrap();
    assert_eq!(apply(&base, &stream).unwrap(), target);
}

#[test]
fn insertion_in_the_middle() {
    let base = ascending(64);
    let mut target = base[..32].to_vec();
    target.extend_from_slice(b"inserted run");
    target.extend_from_slice(&base[32..]);

    let table = prepare(&base, 16).unwrap();
    let stream = diff(&target, &table).unwrap();

    let script = DeltaScript::parse(&stream).unwrap();
    assert_eq!(script.matched_blocks, vec![1, 2, 3, 4]);
    assert_eq!(script.patches.len(), 1);
    assert_eq!(script.patches[0].anchor, 2);
    assert_eq!(script.patches[0].data, b"inserted run");

    assert_eq!(apply(&base, &stream).unwrap(), target);
}

#[test]
fn completely_unrelated_files() {
    let base = ascending(100);
    let target = vec![0xF0u8; 100];

    let table = prepare(&base, 16).unwrap();
    let stream = diff(&target, &table).unwrap();

    let script = DeltaScript::parse(&stream).unwrap();
    assert!(script.matched_blocks.is_empty());
    assert_eq!(script.patches.len(), 1);

    assert_eq!(apply(&base, &stream).unwrap(), target);
}

#[test]
fn corrupt_signature_table_fails_diff() {
    let base = ascending(48);
    let mut table = prepare(&base, 16).unwrap();
    table.truncate(table.len() - 5);

    assert_eq!(
        diff(&base, &table),
        Err(Error::UnexpectedEof {
            needed: 16,
            remaining: 11
        })
    );
}

#[test]
fn oversized_signature_table_fails_diff() {
    let base = ascending(48);
    let mut table = prepare(&base, 16).unwrap();
    table.extend_from_slice(&[0u8; 20]); // one undeclared signature

    assert_eq!(
        diff(&base, &table),
        Err(Error::ExpectedEof { trailing: 20 })
    );
}

#[test]
fn corrupt_diff_stream_fails_apply() {
    let base = ascending(48);
    let table = prepare(&base, 16).unwrap();
    let mut stream = diff(&ascending(50), &table).unwrap();
    stream.truncate(stream.len() - 1);

    assert!(matches!(
        apply(&base, &stream),
        Err(Error::UnexpectedEof { .. })
    ));
}
