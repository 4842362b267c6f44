//! .
//!
//! Library failures. Application seams (observer callbacks, configuration loading, the
//! command line front-end) work with [`anyhow::Result`], into which [`Error`] converts.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// A color string that is neither `#rrggbb` nor `rrggbb`.
  InvalidColor(String),
  /// Generation would produce more elements than the caller allows.
  TooManyElements {
    requested: usize,
    limit: usize
  }
}

impl fmt::Display for Error {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    use Error::*;
    match self {
      InvalidColor(s) => write!(fmt, "invalid color `{}`, expected #rrggbb", s),
      TooManyElements { requested, limit } =>
        write!(fmt, "parameters produce {} elements, limit is {}", requested, limit),
    }
  }
}

impl std::error::Error for Error {}

/// Convenient wrapper around `std::Result`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
