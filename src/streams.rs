//! Input and output stream selection.
//!
//! Both selectors fall back to the process's standard streams when no path
//! is configured. Output files are created exclusively: an existing file
//! is never opened, truncated, or appended to.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::SetupError;

/// Opens the input source.
///
/// `None` yields buffered stdin; otherwise the named file is opened for
/// reading, failing with [`SetupError::Input`].
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, SetupError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| SetupError::Input {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Opens the output destination.
///
/// `None` yields stdout; otherwise the named file is created with the
/// `create_new` open mode, failing with [`SetupError::Output`] for any
/// cause including pre-existence. `create_new` keeps the existence check
/// atomic; there is no separate pre-check.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, SetupError> {
    match path {
        Some(path) => {
            let file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .map_err(|source| SetupError::Output {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
