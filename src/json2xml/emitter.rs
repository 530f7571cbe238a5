//! XML fragment emitter
//!
//! Side-effecting only: appends literal XML fragments to the output sink in
//! the exact order the parser calls it, one line per fragment. Tag names
//! are written verbatim; there is no escaping and no validation of the key
//! text used as an element name (a key containing characters illegal in an
//! XML name is emitted uncorrected — a documented limitation of the
//! translator). Indentation is cosmetic and nests one tab per open element.

use std::io::{self, Write};

pub struct Emitter<W: Write> {
    sink: W,
    depth: usize,
}

impl<W: Write> Emitter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, depth: 0 }
    }

    /// Write an opening tag line and descend one indentation level.
    pub fn open(&mut self, tag: &str) -> io::Result<()> {
        self.pad()?;
        writeln!(self.sink, "<{}>", tag)?;
        self.depth += 1;
        Ok(())
    }

    /// Ascend one indentation level and write the closing tag line.
    pub fn close(&mut self, tag: &str) -> io::Result<()> {
        self.depth = self.depth.saturating_sub(1);
        self.pad()?;
        writeln!(self.sink, "</{}>", tag)
    }

    /// Write a one-line leaf element: `<tag>text</tag>`.
    pub fn leaf(&mut self, tag: &str, text: &str) -> io::Result<()> {
        self.pad()?;
        writeln!(self.sink, "<{}>{}</{}>", tag, text, tag)
    }

    fn pad(&mut self) -> io::Result<()> {
        for _ in 0..self.depth {
            write!(self.sink, "\t")?;
        }
        Ok(())
    }
}
