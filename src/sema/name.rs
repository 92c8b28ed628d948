use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new<S: Into<String>>(name: S) -> ModuleName {
        ModuleName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModuleName {
    fn from(s: &str) -> ModuleName {
        ModuleName(s.to_string())
    }
}

/// Types and classes live apart from values and data constructors, so
/// `[]` can name both the list type and the empty list.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Namespace {
    Value,
    Type,
}

#[derive(Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Name {
    pub occ: String,
    pub module: Option<ModuleName>,
    pub ns: Namespace,
}

impl Name {
    pub fn new<S: Into<String>>(occ: S, module: Option<ModuleName>, ns: Namespace) -> Name {
        Name {
            occ: occ.into(),
            module,
            ns,
        }
    }

    /// A top-level value (or data constructor) defined in `module`.
    pub fn value<S: Into<String>>(module: &str, occ: S) -> Name {
        Name::new(occ, Some(ModuleName::from(module)), Namespace::Value)
    }

    /// A type constructor or class defined in `module`.
    pub fn tycon<S: Into<String>>(module: &str, occ: S) -> Name {
        Name::new(occ, Some(ModuleName::from(module)), Namespace::Type)
    }

    /// A locally bound value (lambda/pattern binder, evidence variable).
    pub fn local<S: Into<String>>(occ: S) -> Name {
        Name::new(occ, None, Namespace::Value)
    }

    pub fn is_external(&self) -> bool {
        self.module.is_some()
    }

    /// Operators are made of symbol characters; constructor operators start
    /// with `:`.
    pub fn is_operator(&self) -> bool {
        !self.is_special() && self.occ.chars().next().map_or(false, is_symbol_char)
    }

    /// `[]`, `()` and tuple constructors can't be qualified or sectioned.
    pub fn is_special(&self) -> bool {
        self.occ == "[]" || tuple_arity(&self.occ).is_some()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.occ)
    }
}

pub fn is_symbol_char(c: char) -> bool {
    "!#$%&*+./<=>?@\\^|-~:".contains(c)
}

/// `()` is the 0-tuple, `(,)` the pair and so on. Returns `None` for
/// anything that is not a tuple occurrence.
pub fn tuple_arity(occ: &str) -> Option<usize> {
    let inner = occ.strip_prefix('(')?.strip_suffix(')')?;
    if inner.chars().all(|c| c == ',') {
        if inner.is_empty() {
            Some(0)
        } else {
            Some(inner.len() + 1)
        }
    } else {
        None
    }
}

pub fn tuple_occ(arity: usize) -> String {
    if arity == 0 {
        str!("()")
    } else {
        format!("({})", ",".repeat(arity - 1))
    }
}

pub const BUILTIN_MODULE: &str = "GHC.Types";

lazy_static! {
    pub static ref LIST_TYCON: Name = Name::tycon(BUILTIN_MODULE, "[]");
    pub static ref NIL_DATACON: Name = Name::value(BUILTIN_MODULE, "[]");
    pub static ref CONS_DATACON: Name = Name::value(BUILTIN_MODULE, ":");
    pub static ref BOOL_TYCON: Name = Name::tycon(BUILTIN_MODULE, "Bool");
    pub static ref TRUE_DATACON: Name = Name::value(BUILTIN_MODULE, "True");
    pub static ref FALSE_DATACON: Name = Name::value(BUILTIN_MODULE, "False");
    pub static ref CHAR_TYCON: Name = Name::tycon(BUILTIN_MODULE, "Char");
    pub static ref INT_TYCON: Name = Name::tycon(BUILTIN_MODULE, "Int");
    pub static ref DOUBLE_TYCON: Name = Name::tycon(BUILTIN_MODULE, "Double");
}

pub fn tuple_tycon(arity: usize) -> Name {
    Name::tycon(BUILTIN_MODULE, tuple_occ(arity))
}

pub fn tuple_datacon(arity: usize) -> Name {
    Name::value(BUILTIN_MODULE, tuple_occ(arity))
}
