use crate::bundle::structs::pem_block::PemBlock;
use crate::bundle::structs::pem_reader::PemReader;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const BEGIN_MARKER: &[u8] = b"-----BEGIN ";
const END_MARKER: &[u8] = b"-----END ";
const MARKER_TAIL: &[u8] = b"-----";

impl<'a> PemReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { remaining: data }
    }

    /// Scans forward to the next well-formed block.
    ///
    /// Text outside of blocks is ignored, and markers only count at the start
    /// of a line. A BEGIN line whose block cannot be
    /// decoded (bad type line, missing END line, invalid base64) is treated as
    /// text and scanning resumes right after it.
    fn next_block(&mut self) -> Option<PemBlock> {
        loop {
            let remaining: &'a [u8] = self.remaining;
            let Some(start) = find_at_line_start(remaining, BEGIN_MARKER) else {
                self.remaining = &[];
                return None;
            };
            let (type_line, body) = split_line(&remaining[start + BEGIN_MARKER.len()..]);
            self.remaining = body;

            let Some(label) = type_line.strip_suffix(MARKER_TAIL) else {
                continue;
            };
            let Ok(label) = std::str::from_utf8(label) else {
                continue;
            };
            let end_line = [END_MARKER, label.as_bytes(), MARKER_TAIL].concat();
            let Some(end) = find_at_line_start(body, &end_line) else {
                continue;
            };
            let Some(contents) = decode_body(&body[..end]) else {
                continue;
            };

            let (_, rest) = split_line(&body[end + end_line.len()..]);
            self.remaining = rest;
            return Some(PemBlock::new(label, contents));
        }
    }
}

impl Iterator for PemReader<'_> {
    type Item = PemBlock;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_block()
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Finds `needle` at offset zero or directly after a `\n`.
fn find_at_line_start(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let mut offset = 0;
    while let Some(index) = find(&haystack[offset..], needle) {
        let position = offset + index;
        if position == 0 || haystack[position - 1] == b'\n' {
            return Some(position);
        }
        offset = position + 1;
    }
    None
}

/// Splits off the first line, trimming trailing whitespace (including `\r`).
fn split_line(data: &[u8]) -> (&[u8], &[u8]) {
    let (line, rest) = match data.iter().position(|b| *b == b'\n') {
        Some(index) => (&data[..index], &data[index + 1..]),
        None => (data, &data[data.len()..]),
    };
    let trimmed = line.len() - line.iter().rev().take_while(|b| b.is_ascii_whitespace()).count();
    (&line[..trimmed], rest)
}

fn decode_body(body: &[u8]) -> Option<Vec<u8>> {
    // `Name: value` header lines (RFC 1421) carry no key material.
    let encoded: Vec<u8> = body
        .split(|b| *b == b'\n')
        .filter(|line| !line.contains(&b':'))
        .flat_map(|line| line.iter().copied())
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    STANDARD.decode(encoded).ok()
}
