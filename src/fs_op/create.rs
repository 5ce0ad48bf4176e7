use std::fs;

use tracing::debug;

use super::error::PathError;
use super::path::AbsPath;

impl AbsPath {
    /// Make sure a folder is on the disk at this path, creating it and any
    /// missing parent folders.
    ///
    /// Succeeds without touching anything when the folder is already there.
    /// Fails with [`PathError::Io`] if the folder can't be made, for example
    /// when a file already occupies the path.
    pub fn ensure_folder(&self) -> Result<(), PathError> {
        if self.exists_folder() {
            return Ok(());
        }
        fs::create_dir_all(self).map_err(|e| PathError::io("ensure folder", self.as_path(), e))?;
        debug!(path = %self, "created folder");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_parents() {
        let td = tempdir().unwrap();
        let base = AbsPath::from_path_buf(td.path().to_path_buf()).unwrap();
        let deep = base.add("a/b/c").unwrap();
        deep.ensure_folder().unwrap();
        assert!(deep.exists_folder());
        assert!(deep.up().unwrap().exists_folder());
    }

    #[test]
    fn second_call_is_a_no_op() {
        let td = tempdir().unwrap();
        let dir = AbsPath::from_path_buf(td.path().join("once")).unwrap();
        dir.ensure_folder().unwrap();
        fs::write(dir.add("keep.txt").unwrap(), b"x").unwrap();
        dir.ensure_folder().unwrap();
        assert!(dir.add("keep.txt").unwrap().exists_file());
    }

    #[test]
    fn file_in_the_way_is_io_error() {
        let td = tempdir().unwrap();
        let file = td.path().join("occupied");
        fs::write(&file, b"x").unwrap();
        let err = AbsPath::from_path_buf(file).unwrap().ensure_folder().unwrap_err();
        assert!(err.is_io(), "{err}");
    }
}
