//! Turning the text of an identifier into the names it refers to.

use std::fmt;

use crate::errors::{QueryError, QueryErrorKind, QueryResult};

use super::{
    env::NameEnv,
    name::{is_symbol_char, tuple_arity, ModuleName, Name},
};

const RESERVED_IDS: &[&str] = &[
    "case", "class", "data", "default", "deriving", "do", "else", "foreign", "if", "import", "in",
    "infix", "infixl", "infixr", "instance", "let", "module", "newtype", "of", "then", "type",
    "where", "_",
];

const RESERVED_OPS: &[&str] = &["..", "::", "=", "\\", "|", "<-", "->", "@", "~", "=>"];

/// An identifier as the user wrote it, before resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RdrName {
    pub qual: Option<ModuleName>,
    pub occ: String,
}

impl fmt::Display for RdrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qual {
            Some(qual) => write!(f, "{}.{}", qual, self.occ),
            None => write!(f, "{}", self.occ),
        }
    }
}

fn parse_error(input: &str) -> QueryError {
    QueryError::new(
        QueryErrorKind::Parse,
        format!("parse error on input ‘{}’", input),
    )
}

fn is_conid(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_uppercase() => chars.all(|c| c.is_alphanumeric() || c == '_' || c == '\''),
        _ => false,
    }
}

fn is_varid(s: &str) -> bool {
    let mut chars = s.chars();
    let starts_ok = match chars.next() {
        Some(c) => c.is_lowercase() || c == '_',
        None => false,
    };

    starts_ok
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '\'')
        && !RESERVED_IDS.contains(&s)
}

fn is_operator(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_symbol_char) && !RESERVED_OPS.contains(&s)
}

/// Splits leading `Conid.` segments off `s`. `Data.Maybe.fromJust` becomes
/// (`Data.Maybe`, `fromJust`); the composition operator `.` stays whole.
fn split_qualifier(s: &str) -> (Option<ModuleName>, &str) {
    let mut quals = vec![];
    let mut rest = s;
    while let Some(dot) = rest.find('.') {
        let segment = &rest[..dot];
        if !is_conid(segment) || dot + 1 >= rest.len() {
            break;
        }
        quals.push(segment);
        rest = &rest[dot + 1..];
    }

    if quals.is_empty() {
        (None, rest)
    } else {
        (Some(ModuleName::new(quals.join("."))), rest)
    }
}

pub fn parse_rdr_name(input: &str) -> QueryResult<RdrName> {
    let s = input.trim();
    if s.is_empty() {
        return Err(parse_error(input));
    }

    if s == "[]" || tuple_arity(s).is_some() {
        return Ok(RdrName {
            qual: None,
            occ: s.to_string(),
        });
    }

    // `(+)` and `(M.+)` name the operator itself
    if let Some(inner) = s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        let (qual, occ) = split_qualifier(inner.trim());
        if is_operator(occ) {
            return Ok(RdrName {
                qual,
                occ: occ.to_string(),
            });
        }
        return Err(parse_error(input));
    }

    let (qual, occ) = split_qualifier(s);
    if is_varid(occ) || is_conid(occ) || is_operator(occ) {
        Ok(RdrName {
            qual,
            occ: occ.to_string(),
        })
    } else {
        Err(parse_error(input))
    }
}

/// Resolves `rdr` against the names in scope. Every match is returned, in
/// scope order, across both namespaces.
pub fn resolve_rdr_name(env: &NameEnv, rdr: &RdrName) -> QueryResult<Vec<Name>> {
    let found = match &rdr.qual {
        Some(qual) => env.lookup_qualified(qual, &rdr.occ),
        None => env.lookup_unqualified(&rdr.occ),
    };

    if found.is_empty() {
        return Err(QueryError::new(
            QueryErrorKind::Name,
            format!("Not in scope: ‘{}’", rdr),
        ));
    }

    log::debug!("`{}` resolved to {} name(s)", rdr, found.len());
    Ok(found.into_iter().cloned().collect())
}

pub fn parse_name(env: &NameEnv, input: &str) -> QueryResult<Vec<Name>> {
    let rdr = parse_rdr_name(input)?;
    resolve_rdr_name(env, &rdr)
}
