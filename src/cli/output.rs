//! Output formatting utilities
//!
//! Renders file blocks as fenced Markdown or as a JSON array. Read failures
//! are reported on the error stream while the block shape on the output
//! stream is kept intact.

use crate::cli::args::OutputFormat;
use crate::domain::FileBlock;
use std::io::{self, Write};

/// Markdown code fence
pub const FENCE: &str = "```";

/// Streams file blocks to an output and an error writer
pub struct BlockPrinter<W: Write, E: Write> {
    format: OutputFormat,
    out: W,
    err: E,
    pending: Vec<FileBlock>,
}

impl<W: Write, E: Write> BlockPrinter<W, E> {
    /// Create a printer for the given format
    pub fn new(format: OutputFormat, out: W, err: E) -> Self {
        Self {
            format,
            out,
            err,
            pending: Vec::new(),
        }
    }

    /// Print one block
    ///
    /// Markdown blocks are written immediately; JSON blocks are held until
    /// [`finish`](Self::finish) so the array is emitted in one piece.
    pub fn print(&mut self, block: FileBlock) -> io::Result<()> {
        match self.format {
            OutputFormat::Markdown => write_markdown(&block, &mut self.out, &mut self.err),
            OutputFormat::Json => {
                if block.error.is_some() {
                    write_diagnostic(&block, &mut self.out, &mut self.err)?;
                }
                self.pending.push(block);
                Ok(())
            }
        }
    }

    /// Write any held output and flush both streams
    pub fn finish(mut self) -> io::Result<(W, E)> {
        if self.format == OutputFormat::Json {
            write_json(&self.pending, &mut self.out)?;
        }

        self.out.flush()?;
        self.err.flush()?;
        Ok((self.out, self.err))
    }
}

/// Write one block as fenced Markdown
///
/// Content without a trailing newline gets one so the closing fence always
/// starts its own line.
pub fn write_markdown<W: Write, E: Write>(
    block: &FileBlock,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    out.write_all(b"file `")?;
    out.write_all(&block.path_bytes())?;
    writeln!(out, "`:")?;
    writeln!(out, "{}", FENCE)?;

    match &block.content {
        Some(content) => {
            out.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                writeln!(out)?;
            }
        }
        None => write_diagnostic(block, out, err)?,
    }

    writeln!(out, "{}", FENCE)?;
    writeln!(out)?;
    Ok(())
}

/// Report a failed read on the error stream
///
/// The output stream is flushed first so both streams stay in block order.
pub fn write_diagnostic<W: Write, E: Write>(
    block: &FileBlock,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    out.flush()?;
    err.write_all(b"[error opening file `")?;
    err.write_all(&block.path_bytes())?;
    writeln!(
        err,
        "`: {}]",
        block.error.as_deref().unwrap_or("unknown error")
    )?;
    err.flush()
}

/// Write all blocks as one pretty-printed JSON array
pub fn write_json<W: Write>(blocks: &[FileBlock], out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, blocks)?;
    writeln!(out)?;
    Ok(())
}
