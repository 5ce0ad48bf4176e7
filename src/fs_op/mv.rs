use std::fs;

use tracing::debug;

use super::error::PathError;
use super::path::AbsPath;

impl AbsPath {
    /// Move the file or folder at this path to `destination` by renaming it.
    ///
    /// This can rename in place, move a file into an existing folder (when
    /// `destination` names the new location inside it), and move a folder
    /// along with its contents. It won't create missing parent folders at
    /// `destination` and never falls back to copying, so a move across
    /// volumes fails. Every failure is a single [`PathError::Move`].
    pub fn move_to(&self, destination: &AbsPath) -> Result<(), PathError> {
        fs::rename(self, destination).map_err(|source| PathError::Move {
            src: self.to_path_buf(),
            dst: destination.to_path_buf(),
            source,
        })?;
        debug!(from = %self, to = %destination, "moved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn base(td: &tempfile::TempDir) -> AbsPath {
        AbsPath::from_path_buf(td.path().to_path_buf()).unwrap()
    }

    #[test]
    fn rename_file_in_place() {
        let td = tempdir().unwrap();
        let src = base(&td).add("a.txt").unwrap();
        let dst = base(&td).add("b.txt").unwrap();
        fs::write(&src, b"data").unwrap();

        src.move_to(&dst).unwrap();
        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "data");
    }

    #[test]
    fn folder_moves_with_contents() {
        let td = tempdir().unwrap();
        let src = base(&td).add("src").unwrap();
        src.add("inner").unwrap().ensure_folder().unwrap();
        fs::write(src.add("inner/f.txt").unwrap(), b"x").unwrap();

        let dst = base(&td).add("dst").unwrap();
        src.move_to(&dst).unwrap();
        assert!(!src.exists_folder());
        assert!(dst.add("inner/f.txt").unwrap().exists_file());
    }

    #[test]
    fn missing_destination_parent_fails() {
        let td = tempdir().unwrap();
        let src = base(&td).add("a.txt").unwrap();
        fs::write(&src, b"data").unwrap();
        let dst = base(&td).add("no/such/folder/a.txt").unwrap();

        let err = src.move_to(&dst).unwrap_err();
        assert!(err.is_io(), "{err}");
        assert!(src.exists_file(), "source should be left alone");
        assert!(!dst.up().unwrap().exists());
    }

    #[test]
    fn missing_source_fails() {
        let td = tempdir().unwrap();
        let src = base(&td).add("ghost").unwrap();
        let dst = base(&td).add("still_ghost").unwrap();
        assert!(src.move_to(&dst).unwrap_err().is_io());
    }
}
