use colored::Colorize;
use std::io::{self, Write};

/// Colors one line of unified diff output the way git does
pub fn highlight_line(line: &str) -> String {
    if line.starts_with("---") || line.starts_with("+++") {
        line.bold().to_string()
    } else if line.starts_with("@@") {
        line.cyan().to_string()
    } else if line.starts_with('+') {
        line.green().to_string()
    } else if line.starts_with('-') {
        line.red().to_string()
    } else {
        line.to_string()
    }
}

/// Wrapper that colors diff output line by line as it is written
///
/// Complete lines are passed through to `inner` as soon as their newline
/// arrives. `flush` also emits an unterminated final line, so it should only
/// be called once the diff has ended.
pub struct HighlightWriter<W: Write> {
    inner: W,
    pending: Vec<u8>,
}

impl<W: Write> HighlightWriter<W> {
    pub fn new(inner: W) -> Self {
        HighlightWriter {
            inner,
            pending: Vec::new(),
        }
    }

    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        let text = String::from_utf8_lossy(line);
        self.inner.write_all(highlight_line(&text).as_bytes())
    }
}

impl<W: Write> Write for HighlightWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);

        while let Some(end) = self.pending.iter().position(|byte| *byte == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=end).collect();
            self.write_line(&line[..end])?;
            self.inner.write_all(b"\n")?;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            let line = std::mem::take(&mut self.pending);
            self.write_line(&line)?;
        }

        self.inner.flush()
    }
}
