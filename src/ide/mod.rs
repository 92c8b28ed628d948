//! Editor queries over a typechecked module: the types of the fragments
//! around a position and the rendered info for an identifier.

use std::fmt;

use crate::{sort::HasSource, span::Source, typing::Ty};

mod info;
mod recover;
mod render;
mod span_index;

pub use info::{fetch_infos, filter_parented, identifier_info, InfoEntry};
pub use recover::{bind_type, expr_type, pat_type, recover_types};
pub use render::{render_infos, render_type};
pub use span_index::{search, Candidates};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Binding,
    Expression,
    Pattern,
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentKind::Binding => write!(f, "binding"),
            FragmentKind::Expression => write!(f, "expression"),
            FragmentKind::Pattern => write!(f, "pattern"),
        }
    }
}

/// A fragment of the program together with its type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedFragment {
    pub src: Source,
    pub ty: Ty,
    pub kind: FragmentKind,
}

impl TypedFragment {
    pub fn new(src: Source, ty: Ty, kind: FragmentKind) -> TypedFragment {
        TypedFragment { src, ty, kind }
    }
}

impl HasSource for TypedFragment {
    fn src(&self) -> &Source {
        &self.src
    }
}

impl fmt::Display for TypedFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} :: {}", self.kind, self.src, self.ty)
    }
}
