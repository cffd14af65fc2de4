//! Puzzle input loading.
//!
//! Every day keeps its `input.txt` next to its `mod.rs`. The loader takes the
//! path of the calling source file, looks for `input.txt` in the same
//! directory and hands back the trimmed text. Use the [`read_input!`] and
//! [`read_lines!`] macros from a day module so the caller's location is
//! captured automatically.

use std::{
    fs, io,
    path::{Path, PathBuf},
    str::Utf8Error,
};

use log::debug;
use miette::Diagnostic;
use thiserror::Error;

pub const INPUT_FILE_NAME: &str = "input.txt";

#[derive(Error, Debug, Diagnostic)]
pub enum InputError {
    #[error("No puzzle input at {}", path.display())]
    #[diagnostic(
        code(input::not_found),
        help("Save your puzzle input as `input.txt` next to the day's mod.rs")
    )]
    NotFound { path: PathBuf },

    #[error("Puzzle input at {} is not valid UTF-8", path.display())]
    #[diagnostic(code(input::decode_error))]
    Decode {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },

    #[error("Failed to read puzzle input at {}", path.display())]
    #[diagnostic(code(input::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Path of the `input.txt` that sits next to `module_location`.
pub fn input_path(module_location: impl AsRef<Path>) -> PathBuf {
    let dir = module_location
        .as_ref()
        .parent()
        .unwrap_or_else(|| Path::new(""));

    dir.join(INPUT_FILE_NAME)
}

/// Reads the `input.txt` sitting next to `module_location`, with leading and
/// trailing whitespace removed.
pub fn read_input(module_location: impl AsRef<Path>) -> Result<String, InputError> {
    let path = input_path(module_location);
    debug!("reading puzzle input from {}", path.display());

    let bytes = fs::read(&path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::NotFound { path: path.clone() },
        _ => InputError::Io {
            path: path.clone(),
            source,
        },
    })?;

    let text = std::str::from_utf8(&bytes).map_err(|source| InputError::Decode {
        path: path.clone(),
        source,
    })?;

    // U+FEFF is not Unicode whitespace but editors like to prepend it
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    debug!("read {} bytes of puzzle input", trimmed.len());

    Ok(trimmed.to_string())
}

/// Same as [`read_input`], split on `'\n'`.
///
/// An empty input gives back a single empty line, not an empty vector.
pub fn read_lines(module_location: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    Ok(read_input(module_location)?
        .split('\n')
        .map(str::to_string)
        .collect())
}

/// Path of the source file the macro is expanded in.
#[macro_export]
macro_rules! module_location {
    () => {
        ::std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(file!())
    };
}

#[macro_export]
macro_rules! input_path {
    () => {
        $crate::input::input_path($crate::module_location!())
    };
}

/// Reads the `input.txt` next to the file this is called from.
#[macro_export]
macro_rules! read_input {
    () => {
        $crate::input::read_input($crate::module_location!())
    };
}

/// Reads the `input.txt` next to the file this is called from, as lines.
#[macro_export]
macro_rules! read_lines {
    () => {
        $crate::input::read_lines($crate::module_location!())
    };
}
