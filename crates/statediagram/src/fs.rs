//! Filesystem seam.
//!
//! The external tools communicate with the pipeline only through files on
//! disk. Every filesystem touch the pipeline makes goes through
//! [`Filesystem`].

use std::{fs, io, path::Path};

/// Filesystem operations used by the pipeline.
pub trait Filesystem {
    /// Returns whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Creates `path` and any missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copies the contents of `from` to `to`, replacing `to` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if either file cannot be accessed.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Returns whether `a` and `b` name the same existing file once links
    /// and relative components are resolved.
    fn same_file(&self, a: &Path, b: &Path) -> bool;
}

impl<T: Filesystem + ?Sized> Filesystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).copy(from, to)
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        (**self).same_file(a, b)
    }
}

/// [`Filesystem`] backed by [`std::fs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::copy(from, to).map(|_| ())
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
