use std::fmt;

use serde::{Deserialize, Serialize};

mod located;
mod source;

pub use located::Located;
pub use source::Source;

/// A 1-based line/column position in a source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub lineno: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub fn new(start: Pos, end: Pos) -> Span {
        Span { start, end }
    }

    /// Both ends are inclusive.
    pub fn contains(&self, pos: Pos) -> bool {
        self.start <= pos && pos <= self.end
    }

    /// True if `self` lies within `parent`. A span is a subspan of itself.
    pub fn is_subspan_of(&self, parent: &Span) -> bool {
        parent.start <= self.start && self.end <= parent.end
    }

    pub fn to_tuple(&self) -> (usize, usize, usize, usize) {
        (
            self.start.lineno,
            self.start.col,
            self.end.lineno,
            self.end.col,
        )
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.start.lineno == self.end.lineno {
            write!(f, "{}-{}", self.start, self.end.col)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl From<Pos> for Span {
    fn from(p: Pos) -> Span {
        Span { start: p, end: p }
    }
}

impl From<(usize, usize, usize, usize)> for Span {
    fn from((l1, c1, l2, c2): (usize, usize, usize, usize)) -> Span {
        Span {
            start: Pos::new(l1, c1),
            end: Pos::new(l2, c2),
        }
    }
}

impl Pos {
    pub fn new(lineno: usize, col: usize) -> Pos {
        Pos { lineno, col }
    }
}

impl From<(usize, usize)> for Pos {
    fn from((lineno, col): (usize, usize)) -> Pos {
        Pos { lineno, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.lineno, self.col)
    }
}
