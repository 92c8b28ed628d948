use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::Source;

/// A tree node together with its source location.
#[derive(Clone, Serialize, Deserialize)]
pub struct Located<T> {
    value: T,
    src: Source,
}

impl<T> std::fmt::Debug for Located<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} @ {}", self.value, self.src)
    }
}

impl<T> std::fmt::Display for Located<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.value, f)
    }
}

impl<T> Deref for Located<T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> PartialEq for Located<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value.eq(&other.value) && self.src.eq(&other.src)
    }
}

impl<T> Eq for Located<T> where T: Eq {}

impl<T> Located<T> {
    pub fn new(value: T, src: Source) -> Located<T> {
        Located { value, src }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn src(&self) -> &Source {
        &self.src
    }
}
