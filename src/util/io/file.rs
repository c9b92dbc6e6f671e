use crate::try_io;
use crate::util::error::{Error, Result};

use std::fs;
use std::io;
use std::path::Path;

pub fn create_dir_if_missing(path: &Path, also_parent: bool) -> Result<bool> {
    if path.exists() {
        if path.is_dir() {
            return Ok(false);
        } else {
            let context = format!("Could not create directory '{}'", path.display());
            error!("{}: A file with this name already exists", context);
            return Err(Error::Io {
                context,
                source: io::Error::new(io::ErrorKind::AlreadyExists, "a file with this name already exists")
            });
        }
    }

    let result = if also_parent {
        fs::create_dir_all(path)
    } else {
        fs::create_dir(path)
    };
    try_io!(result, format!("Could not create directory '{}'", path.display()));
    debug!("Created directory '{}'", path.display());
    Ok(true)
}

/// Fail early if a file can not be used as input
pub fn ensure_readable(path: &Path) -> Result<()> {
    try_io!(fs::File::open(path), format!("Could not open '{}' for reading", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_directory_once() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("dumps").join("daily");

        assert!(create_dir_if_missing(&nested, true).unwrap());
        assert!(nested.is_dir());
        assert!(!create_dir_if_missing(&nested, true).unwrap());
    }

    #[test]
    fn refuses_existing_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("dumps");
        fs::write(&file, "").unwrap();

        assert!(matches!(create_dir_if_missing(&file, false), Err(Error::Io { .. })));
    }

    #[test]
    fn missing_input_is_io_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(ensure_readable(&dir.path().join("orders.sql")), Err(Error::Io { .. })));
    }
}
