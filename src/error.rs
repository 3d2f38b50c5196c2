use std::io;
use std::path::PathBuf;

use thiserror::Error;
use yaxpeax_8086::ListingError;

/// everything that ends a `dis8086` run early.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    /// input ended partway through an instruction. lines before it have been written.
    #[error("{}: {error}", .path.display())]
    Malformed { path: PathBuf, error: ListingError },
}
