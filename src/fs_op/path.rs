use std::borrow::Cow;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PathError;
use super::name::{Name, PathName};

/// An absolute disk path, like `/home/user/file.ext`, `C:\folder\file.ext` or
/// `\\computer\share\file.ext`.
///
/// An `AbsPath` is immutable and always absolute. Building one and navigating
/// with [`add`](AbsPath::add) and [`up`](AbsPath::up) only parses text and
/// never touches the disk. The disk queries and mutations live in the
/// `stat`, `create`, `mv` and `remove` modules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AbsPath {
    inner: PathBuf,
}

impl AbsPath {
    /// Parse `s` into an absolute path.
    ///
    /// The bare drive forms `"C:"` and `"/C:"` get a trailing separator
    /// first, since the platform parser would otherwise read them as
    /// drive-relative. Anything that is still relative after that is
    /// rejected with [`PathError::NotAbsolute`].
    pub fn new(s: &str) -> Result<AbsPath, PathError> {
        let text = expand_drive_shorthand(s);
        AbsPath::from_path_buf(PathBuf::from(text.as_ref()))
    }

    /// Wrap an already-parsed native path, checking that it is absolute.
    pub fn from_path_buf(path: PathBuf) -> Result<AbsPath, PathError> {
        if !path.is_absolute() {
            return Err(PathError::NotAbsolute(path.display().to_string()));
        }
        Ok(AbsPath { inner: path })
    }

    pub fn as_path(&self) -> &Path {
        &self.inner
    }

    /// Copy of the native path inside.
    pub fn to_path_buf(&self) -> PathBuf {
        self.inner.clone()
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.inner
    }

    /// The file or folder name at the end, like `"file.ext"` or `"folder"`.
    ///
    /// A path ending in `..` gives `".."`. A root has no final name and
    /// gives an empty `Name`.
    pub fn name(&self) -> Name {
        match self.inner.components().next_back() {
            Some(c @ (Component::Normal(_) | Component::ParentDir)) => {
                Name::new(c.as_os_str().to_string_lossy().into_owned())
            }
            _ => Name::default(),
        }
    }

    /// This path with `segment`, like `"file.ext"` or `"folder/file.ext"`,
    /// added to the end.
    ///
    /// Leading roots or drive prefixes on `segment` are ignored so the result
    /// always stays below `self`.
    pub fn add(&self, segment: impl AsRef<str>) -> Result<AbsPath, PathError> {
        let mut joined = self.inner.clone();
        for component in Path::new(segment.as_ref()).components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {}
                other => joined.push(other.as_os_str()),
            }
        }
        AbsPath::from_path_buf(joined).map_err(|e| PathError::OutOfBounds(e.to_string()))
    }

    pub fn add_name(&self, name: &Name) -> Result<AbsPath, PathError> {
        self.add(name)
    }

    pub fn add_path_name(&self, path: &PathName) -> Result<AbsPath, PathError> {
        self.add(path)
    }

    /// This path with the last name chopped off.
    ///
    /// Fails with [`PathError::OutOfBounds`] on a root like `/`, `C:\` or
    /// `\\computer\share`.
    pub fn up(&self) -> Result<AbsPath, PathError> {
        let parent = self
            .inner
            .parent()
            .ok_or_else(|| PathError::OutOfBounds(format!("`{self}` is a root")))?;
        AbsPath::from_path_buf(parent.to_path_buf())
            .map_err(|e| PathError::OutOfBounds(e.to_string()))
    }

    /// True when there is nothing above this path.
    pub fn is_root(&self) -> bool {
        self.inner.parent().is_none()
    }
}

// Single ASCII drive letters only, at exactly length 2 or 3.
fn expand_drive_shorthand(s: &str) -> Cow<'_, str> {
    match s.as_bytes() {
        [letter, b':'] if letter.is_ascii_alphabetic() => Cow::Owned(format!("{s}/")),
        [b'/', letter, b':'] if letter.is_ascii_alphabetic() => {
            // std only treats prefixed forms as absolute on Windows.
            if cfg!(windows) {
                Cow::Owned(format!("{}/", &s[1..]))
            } else {
                Cow::Owned(format!("{s}/"))
            }
        }
        _ => Cow::Borrowed(s),
    }
}

impl fmt::Display for AbsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

impl AsRef<Path> for AbsPath {
    fn as_ref(&self) -> &Path {
        &self.inner
    }
}

impl FromStr for AbsPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AbsPath::new(s)
    }
}

impl TryFrom<&str> for AbsPath {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        AbsPath::new(s)
    }
}

impl TryFrom<String> for AbsPath {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        AbsPath::new(&s)
    }
}

impl TryFrom<PathBuf> for AbsPath {
    type Error = PathError;

    fn try_from(p: PathBuf) -> Result<Self, Self::Error> {
        AbsPath::from_path_buf(p)
    }
}

impl From<AbsPath> for String {
    fn from(p: AbsPath) -> String {
        p.to_string()
    }
}

impl From<AbsPath> for PathBuf {
    fn from(p: AbsPath) -> PathBuf {
        p.inner
    }
}
