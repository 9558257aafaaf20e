//! Output for the CLI frontend.
//!
//! Writes generated TikZ to a file or to stdout.

use std::io::{self, ErrorKind, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, WaveError};

/// Write `text` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => write_file(path, text),
        None => write_stdout(text),
    }
}

/// Write `text` to a file, replacing its contents.
pub fn write_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| WaveError::FileWriteError {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "wrote output file");
    Ok(())
}

/// Write `text` to stdout.
///
/// A closed pipe (`wavetikz ... | head`) ends output quietly.
pub fn write_stdout(text: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_to(&mut handle, text)
}

fn write_to<W: Write>(out: &mut W, text: &str) -> Result<()> {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("output pipe closed");
            Ok(())
        }
        Err(source) => Err(WaveError::OutputError { source }),
    }
}
