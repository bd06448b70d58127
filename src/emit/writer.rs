// src/emit/writer.rs

use std::io::{self, BufWriter, Write};

use tracing::trace;

use crate::emit::Emitter;

/// Writes each initializer verbatim as one line.
///
/// Output is buffered; [`Emitter::finish`] flushes it.
pub struct LineEmitter<W: Write> {
    out: BufWriter<W>,
    lines: usize,
}

impl<W: Write> LineEmitter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
            lines: 0,
        }
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.out.into_inner().map_err(|e| e.into_error())
    }
}

impl LineEmitter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Emitter for LineEmitter<W> {
    fn emit(&mut self, node: &str, text: &str) -> io::Result<()> {
        trace!(node = %node, "emitting initializer");
        writeln!(self.out, "{text}")?;
        self.lines += 1;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
