use std::fs;
use std::path::Path;

use super::path::AbsPath;

/// What occupies a path on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Nothing is there.
    NotFound,
    /// A folder.
    Folder,
    /// A regular file.
    File,
    /// Something that is neither a regular file nor a folder
    /// (socket, FIFO, device node).
    Other,
}

impl PathKind {
    /// Classify `path` with a single `metadata` call, following symlinks.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        match fs::metadata(path.as_ref()) {
            Err(_) => PathKind::NotFound,
            Ok(md) if md.is_dir() => PathKind::Folder,
            Ok(md) if md.is_file() => PathKind::File,
            Ok(_) => PathKind::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PathKind::NotFound => "not found",
            PathKind::Folder => "folder",
            PathKind::File => "file",
            PathKind::Other => "other",
        }
    }
}

impl AbsPath {
    /// Look at the disk and classify what is at this path.
    pub fn kind(&self) -> PathKind {
        PathKind::of(self)
    }

    /// True if a file or folder is on the disk at this path.
    pub fn exists(&self) -> bool {
        self.kind() != PathKind::NotFound
    }

    /// True if something that is not a folder is on the disk at this path.
    pub fn exists_file(&self) -> bool {
        matches!(self.kind(), PathKind::File | PathKind::Other)
    }

    /// True if a folder is on the disk at this path.
    pub fn exists_folder(&self) -> bool {
        self.kind() == PathKind::Folder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn abs(p: &Path) -> AbsPath {
        AbsPath::from_path_buf(p.to_path_buf()).unwrap()
    }

    #[test]
    fn nothing_there() {
        let tmp = tempdir().unwrap();
        let p = abs(&tmp.path().join("no_such_file_hopefully"));
        assert_eq!(p.kind(), PathKind::NotFound);
        assert!(!p.exists());
        assert!(!p.exists_file());
        assert!(!p.exists_folder());
    }

    #[test]
    fn file_and_folder() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, b"hello").unwrap();
        let file = abs(&file);
        assert_eq!(file.kind(), PathKind::File);
        assert!(file.exists());
        assert!(file.exists_file());
        assert!(!file.exists_folder());

        let dir = abs(tmp.path()).add("subdir").unwrap();
        fs::create_dir(&dir).unwrap();
        assert_eq!(dir.kind(), PathKind::Folder);
        assert!(dir.exists());
        assert!(dir.exists_folder());
        assert!(!dir.exists_file());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_not_found() {
        let tmp = tempdir().unwrap();
        let link = tmp.path().join("dangling");
        std::os::unix::fs::symlink(tmp.path().join("gone"), &link).unwrap();
        assert_eq!(PathKind::of(&link), PathKind::NotFound);
    }
}
