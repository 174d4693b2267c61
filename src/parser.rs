use std::io::BufRead;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::domain::Domain;
use crate::error::{CheckerError, Result};
use crate::types::Batch;

/// Regex pattern for a count line: a non-negative decimal integer,
/// optionally surrounded by whitespace
static COUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\+?([0-9]+)\s*$").expect("COUNT_PATTERN: hardcoded regex is invalid")
});

/// Upper bound on capacity reserved up front from a declared count.
const MAX_PREALLOC: usize = 1 << 16;

/// Line-oriented reader over batch input that tracks the current line number.
///
/// Lines are read as raw bytes; `\n` and `\r\n` endings are stripped.
pub struct InputReader<R> {
    reader: R,
    buf: Vec<u8>,
    line_num: usize,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_num: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn line_num(&self) -> usize {
        self.line_num
    }

    fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_num += 1;

        let mut line = self.buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest.strip_suffix(b"\r").unwrap_or(rest);
        }
        Ok(Some(line))
    }

    /// Read a count line.
    pub fn read_count(&mut self) -> Result<usize> {
        let next = self.line_num + 1;
        let bytes = self
            .next_line()?
            .ok_or_else(|| CheckerError::truncated(next, "missing count line"))?;
        let line = String::from_utf8_lossy(bytes).into_owned();

        let digits = COUNT_PATTERN
            .captures(&line)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| {
                CheckerError::bad_count(
                    self.line_num,
                    format!("expected a non-negative integer, got {:?}", line),
                )
            })?;

        digits.as_str().parse::<usize>().map_err(|e| {
            CheckerError::bad_count(
                self.line_num,
                format!("count {:?} out of range: {}", digits.as_str(), e),
            )
        })
    }

    /// Read exactly `count` lines, one domain per line.
    pub fn read_domains(&mut self, count: usize) -> Result<Vec<Domain>> {
        let mut domains = Vec::with_capacity(count.min(MAX_PREALLOC));

        while domains.len() < count {
            let next = self.line_num + 1;
            let got = domains.len();
            let line = self.next_line()?.ok_or_else(|| {
                CheckerError::truncated(next, format!("expected {} domains, got {}", count, got))
            })?;
            // Domains are opaque text: invalid UTF-8 is replaced, never rejected
            domains.push(Domain::new(&String::from_utf8_lossy(line)));
        }

        Ok(domains)
    }

    /// Read a count line followed by that many domains.
    pub fn read_section(&mut self) -> Result<Vec<Domain>> {
        let count = self.read_count()?;
        self.read_domains(count)
    }
}

/// Parse batch input: the block-list section followed by the query section.
///
/// Lines after the last declared query are ignored.
pub fn parse_batch<R: BufRead>(reader: R) -> Result<Batch> {
    let mut input = InputReader::new(reader);

    let forbidden = input.read_section()?;
    let queries = input.read_section()?;

    debug!(
        forbidden = forbidden.len(),
        queries = queries.len(),
        lines = input.line_num(),
        "parsed batch input"
    );

    Ok(Batch { forbidden, queries })
}
