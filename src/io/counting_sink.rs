use std::io;
use std::io::Write;

/// Sink that discards every byte and only remembers how many it was given.
/// Used to size a value without materializing its wire bytes.
#[derive(Debug, Default)]
pub(crate) struct CountingSink {
    written: u64,
}

impl CountingSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }
    pub(crate) fn written(&self) -> u64 {
        self.written
    }
}

impl Write for CountingSink {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written += buf.len() as u64;
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
