#[path = "common/mod.rs"]
mod common;

use common::write_file;
use routing_cycle_detector::{bucket_index, bucket_path, partition, BucketWriter};
use std::fs;

#[test]
fn rejects_non_power_of_two_bucket_count() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "input.txt", "A|B|C1|S1\n");
    let mut writer = BucketWriter::new(dir.path(), 128);
    let err = partition(&input, 100, &mut writer).unwrap_err();
    assert!(err.to_string().contains("power of two"));
}

#[test]
fn same_key_always_same_bucket() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "input.txt", "A|B|C1|S1\nB|C|C1|S1\nX|Y|C2|S2\n");
    let mut writer = BucketWriter::new(dir.path(), 128);
    let non_empty = partition(&input, 16, &mut writer).unwrap();

    let i1 = bucket_index(b"C1", b"S1", 16);
    let i2 = bucket_index(b"C2", b"S2", 16);
    assert!(non_empty.contains(&i1));
    assert!(non_empty.contains(&i2));

    let bucket1 = fs::read_to_string(bucket_path(dir.path(), i1)).unwrap();
    assert_eq!(bucket1.lines().count(), 2);
}

#[test]
fn skips_malformed_and_empty_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "input.txt", "A|B\n\nA|B|C1|S1\n");
    let mut writer = BucketWriter::new(dir.path(), 128);
    let non_empty = partition(&input, 16, &mut writer).unwrap();
    assert_eq!(non_empty.len(), 1);
    let idx = bucket_index(b"C1", b"S1", 16);
    let bucket = fs::read_to_string(bucket_path(dir.path(), idx)).unwrap();
    assert_eq!(bucket, "A|B|C1|S1\n");
}

#[test]
fn strips_crlf_terminators() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "input.txt", "A|B|C1|S1\r\n");
    let mut writer = BucketWriter::new(dir.path(), 128);
    let non_empty = partition(&input, 16, &mut writer).unwrap();
    let idx = bucket_index(b"C1", b"S1", 16);
    assert_eq!(non_empty, vec![idx]);
    let bucket = fs::read_to_string(bucket_path(dir.path(), idx)).unwrap();
    assert_eq!(bucket, "A|B|C1|S1\n");
}
