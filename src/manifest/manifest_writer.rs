use crate::error::{ClasspathError, Result};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Writes the one-line manifest file, replacing any previous content.
pub struct ManifestWriter {
    output_file: PathBuf,
}

impl ManifestWriter {
    pub fn new<P: Into<PathBuf>>(output_file: P) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Writes `line` followed by the platform line ending.
    ///
    /// The write is a plain truncate-and-write; it is not atomic.
    pub fn write_line(&self, line: &str) -> Result<u64> {
        if self.output_file.as_os_str().is_empty() {
            return Err(ClasspathError::InvalidPath {
                path: "output file path is empty".to_string(),
            });
        }

        self.ensure_parent_dir()?;

        let file = fs::File::create(&self.output_file)
            .map_err(|e| ClasspathError::write(&self.output_file, e))?;
        write_contents(&mut BufWriter::new(file), line)
            .map_err(|e| ClasspathError::write(&self.output_file, e))?;

        let bytes = (line.len() + LINE_ENDING.len()) as u64;
        info!(output_file = %self.output_file.display(), bytes, "wrote manifest");
        Ok(bytes)
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        let parent = match self.output_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => return Ok(()),
        };

        if !parent.exists() {
            debug!(dir = %parent.display(), "creating output directory");
            fs::create_dir_all(parent).map_err(|e| ClasspathError::create_dir(parent, e))?;
        }

        Ok(())
    }
}

fn write_contents<W: Write>(writer: &mut W, line: &str) -> io::Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(LINE_ENDING.as_bytes())?;
    writer.flush()
}
