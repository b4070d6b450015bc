//! Byte-level parsing of routing-claim records.
//!
//! Parsing never decodes to UTF-8: the hot path only slices the input on
//! `|` and `\r`/`\n`, matching the original input bytes exactly so the same
//! parser can be reused on bucket files without any format drift.

use std::hash::Hash;

/// One input line split into its four pipe-separated fields. Borrows from
/// the original line buffer; never allocates.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    pub source: &'a [u8],
    pub destination: &'a [u8],
    pub claim_id: &'a [u8],
    pub status_code: &'a [u8],
}

/// Split a line (already stripped of its `\n`/`\r\n` terminator) on `|` with
/// at most 3 splits, mirroring the source format's `split(maxsplit=3)`
/// semantics: a 5th pipe-delimited segment is folded into `status_code`
/// rather than causing the line to be rejected. Returns `None` when fewer
/// than four fields are present (malformed-line policy: skip silently).
pub fn parse_line(line: &[u8]) -> Option<Record<'_>> {
    let mut fields = line.splitn(4, |&b| b == b'|');
    let source = fields.next()?;
    let destination = fields.next()?;
    let claim_id = fields.next()?;
    let status_code = fields.next()?;
    Some(Record { source, destination, claim_id, status_code })
}

/// Strip a single trailing `\r` from a line already split on `\n`.
#[inline]
pub fn strip_cr(line: &[u8]) -> &[u8] {
    match line.last() {
        Some(b'\r') => &line[..line.len() - 1],
        _ => line,
    }
}

/// The `(claim_id, status_code)` pair that defines a per-key subgraph.
/// Compared and hashed as raw bytes; distinct byte sequences are distinct keys.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Key {
    pub claim_id: Vec<u8>,
    pub status_code: Vec<u8>,
}

impl Key {
    pub fn from_fields(claim_id: &[u8], status_code: &[u8]) -> Self {
        Self { claim_id: claim_id.to_vec(), status_code: status_code.to_vec() }
    }
}
