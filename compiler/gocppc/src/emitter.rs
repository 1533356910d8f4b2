//! Output Emitter
//!
//! Abstraction for where translated text goes.
//! Supports string building for in-memory conversion and buffered file output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for emitting translated output.
///
/// The driver writes each translated declaration to an emitter in source
/// order. Implementations decide where the text ends up.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);
}

/// String-based emitter for in-memory conversion.
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the emitted output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Buffered emitter writing to a file.
///
/// Creating the emitter creates or truncates the file. Write failures are
/// held until [`FileEmitter::finish`]; after the first one, further output
/// is discarded.
pub struct FileEmitter {
    writer: BufWriter<File>,
    error: Option<io::Error>,
}

impl FileEmitter {
    /// Create (or truncate) `path` for writing.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
            error: None,
        })
    }

    /// Flush buffered output and report the first write failure, if any.
    pub fn finish(mut self) -> io::Result<()> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()
    }
}

impl Emitter for FileEmitter {
    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.writer.write_all(text.as_bytes()) {
            self.error = Some(error);
        }
    }
}

#[cfg(test)]
mod tests;
