//! Line splitting shared by every feed.
//!
//! Dependency files come from tools on several platforms, so `\n`, `\r\n` and
//! a lone `\r` all end a line. Terminators are not part of the yielded line.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Iterator over the lines of a reader, splitting on `\n`, `\r\n` and `\r`.
///
/// Stops after the first I/O or UTF-8 error.
#[derive(Debug)]
pub struct UniversalLines<R> {
    reader: R,
    pending: VecDeque<String>,
    done: bool,
}

impl<R: BufRead> UniversalLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Read up to the next `\n` and queue every line it contains.
    fn fill(&mut self) -> io::Result<()> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            self.done = true;
            return Ok(());
        }
        for piece in split_terminators(&buf) {
            let line = std::str::from_utf8(piece).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    "stream did not contain valid UTF-8",
                )
            })?;
            self.pending.push_back(line.to_string());
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for UniversalLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            if self.done {
                return None;
            }
            if let Err(e) = self.fill() {
                self.done = true;
                return Some(Err(e));
            }
        }
    }
}

/// Split a chunk ending in at most one `\n` into lines. A `\r` only reaches
/// the end of a chunk at EOF, so `\r\n` is never split across chunks.
fn split_terminators(buf: &[u8]) -> Vec<&[u8]> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < buf.len() {
        match buf[i] {
            b'\n' => {
                out.push(&buf[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                out.push(&buf[start..i]);
                i += 1;
                if buf.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < buf.len() {
        out.push(&buf[start..]);
    }
    out
}
