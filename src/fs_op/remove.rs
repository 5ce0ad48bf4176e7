use std::fs;

use tracing::debug;

use super::error::PathError;
use super::path::AbsPath;

impl AbsPath {
    /// Delete the file or empty folder at this path.
    ///
    /// Deleting a path with nothing there is a no-op, so callers don't need
    /// to check first. A folder with contents is not removed and gives
    /// [`PathError::Io`], as does any other OS failure. A symlink is removed
    /// itself, never the thing it points at; a dangling one counts as
    /// nothing there.
    pub fn delete(&self) -> Result<(), PathError> {
        if !self.exists() {
            return Ok(());
        }
        let result = match fs::symlink_metadata(self) {
            Ok(md) if md.is_dir() => fs::remove_dir(self),
            Ok(_) => fs::remove_file(self),
            Err(e) => Err(e),
        };
        result.map_err(|e| PathError::io("delete", self.as_path(), e))?;
        debug!(path = %self, "deleted");
        Ok(())
    }
}
