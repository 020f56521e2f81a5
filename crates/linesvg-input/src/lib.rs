//! Input for linesvg: where sentences come from
//!
//! The first stage of the pipeline. An [`InputSource`] names a file or
//! standard input; opening it yields a [`LineSource`], a lazy iterator of
//! sentences in input order with line terminators stripped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use linesvg_core::error::{LinesvgError, Result};

/// Input spelling that selects standard input
pub const STDIN_SENTINEL: &str = "--";

/// Where sentences are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Interpret a command-line value, treating `--` as standard input
    pub fn parse(value: &str) -> Self {
        if value == STDIN_SENTINEL {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    /// Human-readable name used in messages
    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
        }
    }

    /// Open the source for reading
    ///
    /// A missing file fails here, before anything is rendered.
    pub fn open(&self) -> Result<LineSource> {
        match self {
            Self::File(path) => LineSource::from_file(path),
            Self::Stdin => Ok(LineSource::new(
                Box::new(BufReader::new(io::stdin())),
                self.display_name(),
            )),
        }
    }
}

/// Lazy, ordered sequence of sentences
///
/// Yields `Err` once on a read failure or invalid UTF-8 and is exhausted
/// afterwards. Sentences already yielded stay yielded.
pub struct LineSource {
    reader: Box<dyn BufRead>,
    name: String,
    buf: Vec<u8>,
    done: bool,
}

impl LineSource {
    /// Wrap any buffered reader, naming it for error messages
    pub fn new(reader: Box<dyn BufRead>, name: impl Into<String>) -> Self {
        Self {
            reader,
            name: name.into(),
            buf: Vec::new(),
            done: false,
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LinesvgError::InputNotFound(path.to_path_buf()),
            _ => LinesvgError::InputRead {
                source_name: path.display().to_string(),
                reason: e.to_string(),
            },
        })?;
        log::debug!("Reading sentences from {}", path.display());
        Ok(Self::new(
            Box::new(BufReader::new(file)),
            path.display().to_string(),
        ))
    }

    /// Name of the underlying source
    pub fn name(&self) -> &str {
        &self.name
    }

    fn read_error(&mut self, reason: String) -> LinesvgError {
        self.done = true;
        LinesvgError::InputRead {
            source_name: self.name.clone(),
            reason,
        }
    }
}

impl Iterator for LineSource {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                match String::from_utf8(std::mem::take(&mut self.buf)) {
                    Ok(line) => Some(Ok(line)),
                    Err(_) => Some(Err(self.read_error("input is not valid UTF-8".to_string()))),
                }
            }
            Err(e) => Some(Err(self.read_error(e.to_string()))),
        }
    }
}
