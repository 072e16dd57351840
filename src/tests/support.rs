#![cfg(test)]

use std::io::{self, Read, Write};

/// Source that reports end of stream `dry_reads` times before serving `data`
/// one byte per read. Models a pipe or socket whose EOF is not sticky.
pub(crate) struct StutteringReader {
    data: Vec<u8>,
    pos: usize,
    dry_reads: usize,
}

impl StutteringReader {
    pub(crate) fn new(dry_reads: usize, data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            pos: 0,
            dry_reads,
        }
    }
}

impl Read for StutteringReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.dry_reads > 0 {
            self.dry_reads -= 1;
            return Ok(0);
        }
        if self.pos == self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

/// Source that hands out at most `chunk` bytes per read and interrupts the
/// first call.
pub(crate) struct ChunkedReader {
    data: Vec<u8>,
    pos: usize,
    chunk: usize,
    interrupted: bool,
}

impl ChunkedReader {
    pub(crate) fn new(chunk: usize, data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            pos: 0,
            chunk,
            interrupted: false,
        }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
        }
        let n = buf.len().min(self.chunk).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Sink that accepts `budget` bytes and then fails every write.
pub(crate) struct FailingSink {
    pub(crate) budget: usize,
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        let n = buf.len().min(self.budget);
        self.budget -= n;
        Ok(n)
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
