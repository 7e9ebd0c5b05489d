// src/source.rs
//! Forward-only line stream over a plain or gzip-compressed log file.

use crate::discovery::LogFile;
use crate::error::{AnalyzerError, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

/// Longest line read into memory. Anything longer is skipped.
pub const MAX_LINE_BYTES: usize = 64 * 1024;

/// Opens the log for streaming. `.gz` files are decompressed on the fly.
///
/// # Errors
/// Returns error if the file cannot be opened.
pub fn open(log: &LogFile) -> Result<LossyLines<Box<dyn BufRead>>> {
    let file = File::open(&log.path).map_err(|e| AnalyzerError::io(e, &log.path))?;
    let reader: Box<dyn BufRead> = if log.compressed {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(LossyLines::new(reader))
}

/// Yields lines without their terminator.
///
/// Invalid UTF-8 is replaced rather than treated as a read error; a corrupt
/// line goes to the parser like any other and never aborts the run. A line
/// longer than [`MAX_LINE_BYTES`] is drained without being kept and comes out
/// empty, so it counts as unparsable.
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Consumes input up to and including the next newline.
    fn skip_rest_of_line(&mut self) -> io::Result<()> {
        loop {
            let (found, used) = {
                let available = self.reader.fill_buf()?;
                match available.iter().position(|&b| b == b'\n') {
                    Some(i) => (true, i + 1),
                    None => (available.is_empty(), available.len()),
                }
            };
            self.reader.consume(used);
            if found {
                return Ok(());
            }
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        let limit = MAX_LINE_BYTES as u64 + 1;
        match (&mut self.reader).take(limit).read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                } else if self.buf.len() > MAX_LINE_BYTES {
                    self.buf.clear();
                    if let Err(e) = self.skip_rest_of_line() {
                        return Some(Err(e));
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
