use std::ffi::OsStr;
use std::fmt;
use std::ops::Div;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Hash, Ord, PartialOrd, Eq, PartialEq, Serialize, Deserialize)]
pub struct FilePath {
    buf: PathBuf,
}

impl FilePath {
    pub fn new() -> FilePath {
        FilePath {
            buf: PathBuf::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buf.components().count() == 0
    }

    /// Returns the final component of the `FilePath`, if there is one.
    pub fn file_name(&self) -> Option<String> {
        self.buf
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.to_string())
    }

    pub fn has_extension<S: AsRef<OsStr>>(&self, ext: S) -> bool {
        self.buf.extension().map_or(false, |e| e == ext.as_ref())
    }

    /// Lexically normalizes the path: `.` components are dropped and `..`
    /// pops the previous normal component. The filesystem is never touched,
    /// so paths that don't exist normalize the same way as ones that do.
    pub fn normalize(&self) -> FilePath {
        let mut buf = PathBuf::new();
        for component in self.buf.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if buf.file_name().is_some() {
                        buf.pop();
                    } else {
                        buf.push(component);
                    }
                }
                other => buf.push(other),
            }
        }

        FilePath { buf }
    }

    /// Two paths name the same file if they normalize to the same path.
    pub fn same_file(&self, other: &FilePath) -> bool {
        self.normalize() == other.normalize()
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.buf.display())
    }
}

impl<T: Into<PathBuf>> From<T> for FilePath {
    fn from(s: T) -> FilePath {
        FilePath { buf: s.into() }
    }
}

impl FromStr for FilePath {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<FilePath, &'static str> {
        Ok(FilePath { buf: s.into() })
    }
}

impl<T: AsRef<Path>> Div<T> for FilePath {
    type Output = FilePath;

    fn div(self, rhs: T) -> Self::Output {
        FilePath {
            buf: self.buf.join(rhs),
        }
    }
}

impl<'a, T: AsRef<Path>> Div<T> for &'a FilePath {
    type Output = FilePath;

    fn div(self, rhs: T) -> Self::Output {
        FilePath {
            buf: self.buf.join(rhs),
        }
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        self.buf.as_path()
    }
}
