use routing_cycle_detector::{bucket_path, BucketWriter};
use std::fs;

#[test]
fn evicts_least_recently_used_at_capacity() {
    let dir = tempfile::tempdir().unwrap();
    let mut w = BucketWriter::new(dir.path(), 2);

    w.write(0, b"a").unwrap();
    w.write(1, b"b").unwrap();
    assert_eq!(w.open_handles(), 2);

    // touch 0 so it becomes MRU, 1 stays LRU
    w.write(0, b"a2").unwrap();
    // opening a third bucket evicts 1, not 0
    w.write(2, b"c").unwrap();
    assert_eq!(w.open_handles(), 2);

    w.close_all().unwrap();

    let b0 = fs::read_to_string(bucket_path(dir.path(), 0)).unwrap();
    assert_eq!(b0, "a\na2\n");
    let b2 = fs::read_to_string(bucket_path(dir.path(), 2)).unwrap();
    assert_eq!(b2, "c\n");
}

#[test]
fn durable_after_close_all() {
    let dir = tempfile::tempdir().unwrap();
    let mut w = BucketWriter::new(dir.path(), 128);
    w.write(3, b"x|y|c|s").unwrap();
    w.close_all().unwrap();
    let content = fs::read_to_string(bucket_path(dir.path(), 3)).unwrap();
    assert_eq!(content, "x|y|c|s\n");
}
