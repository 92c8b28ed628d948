mod containment;

pub use containment::{cmp_containment, HasSource, SortByContainment};
