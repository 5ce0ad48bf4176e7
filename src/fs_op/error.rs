use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by `AbsPath` construction, navigation and disk operations.
#[derive(Error, Debug)]
pub enum PathError {
    /// The text or native path handed to a constructor was relative.
    #[error("not an absolute path: `{0}`")]
    NotAbsolute(String),

    /// Navigation left the filesystem: `up()` on a root, or a join that did
    /// not stay absolute.
    #[error("path navigation out of bounds: {0}")]
    OutOfBounds(String),

    /// A disk operation failed at the OS level.
    #[error("{op} failed for `{}`: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rename failed, with both ends of the move.
    #[error("move from `{}` to `{}` failed: {source}", .src.display(), .dst.display())]
    Move {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PathError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PathError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// True for environment failures the caller may want to retry.
    pub fn is_io(&self) -> bool {
        matches!(self, PathError::Io { .. } | PathError::Move { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_message_names_operation_and_path() {
        let err = PathError::io(
            "delete",
            "/tmp/x",
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert!(err.is_io());
        let msg = err.to_string();
        assert!(msg.contains("delete"), "{msg}");
        assert!(msg.contains("/tmp/x"), "{msg}");
    }

    #[test]
    fn invariant_errors_are_not_io() {
        assert!(!PathError::NotAbsolute("a/b".into()).is_io());
        assert!(!PathError::OutOfBounds("/".into()).is_io());
    }

    #[test]
    fn move_error_names_both_ends() {
        let err = PathError::Move {
            src: "/a".into(),
            dst: "/b/c".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.is_io());
        let msg = err.to_string();
        assert!(msg.contains("`/a`") && msg.contains("`/b/c`"), "{msg}");
    }
}
