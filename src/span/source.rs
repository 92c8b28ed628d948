use serde::{Deserialize, Serialize};

use crate::pathlib::FilePath;

use super::{Pos, Span};

/// Where a node came from. Nodes the typechecker invents (dictionary
/// bindings, generated wrappers) carry no span.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Source {
    pub filepath: FilePath,
    pub span: Option<Span>,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(span) = &self.span {
            write!(f, "{}:{}", self.filepath, span)
        } else {
            write!(f, "{}", self.filepath)
        }
    }
}

impl From<FilePath> for Source {
    fn from(filepath: FilePath) -> Self {
        Self {
            filepath,
            span: None,
        }
    }
}

impl Source {
    pub fn new(filepath: FilePath, span: Span) -> Source {
        Source {
            filepath,
            span: Some(span),
        }
    }

    /// A source with no real location.
    pub fn synthetic(filepath: FilePath) -> Source {
        Source::from(filepath)
    }

    pub fn is_good(&self) -> bool {
        self.span.is_some()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.span.map_or(false, |span| span.contains(pos))
    }

    /// Sources in different files are never nested.
    pub fn is_subspan_of(&self, parent: &Source) -> bool {
        if self.filepath != parent.filepath {
            return false;
        }

        match (&self.span, &parent.span) {
            (Some(span), Some(parent_span)) => span.is_subspan_of(parent_span),
            _ => false,
        }
    }

    pub fn to_tuple(&self) -> Option<(usize, usize, usize, usize)> {
        self.span.map(|span| span.to_tuple())
    }
}
