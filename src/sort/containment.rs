use std::cmp::Ordering;

use crate::span::{Located, Source};

pub trait HasSource {
    fn src(&self) -> &Source;
}

impl<T> HasSource for Located<T> {
    fn src(&self) -> &Source {
        Located::src(self)
    }
}

impl HasSource for Source {
    fn src(&self) -> &Source {
        self
    }
}

/// Nested sources sort before the sources that contain them. Sources
/// that don't nest, including ones in different files, compare equal.
pub fn cmp_containment(a: &Source, b: &Source) -> Ordering {
    if a.is_subspan_of(b) {
        Ordering::Less
    } else if b.is_subspan_of(a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

pub trait SortByContainment {
    /// Stable sort by `cmp_containment`, innermost first.
    ///
    /// Containment is only a partial order, which the standard library
    /// sorts are not specified for. Instead this repeatedly takes the
    /// earliest element that has nothing nested inside it left, so
    /// elements that don't nest keep their relative order.
    fn sort_by_containment(&mut self);
}

impl<T: HasSource> SortByContainment for Vec<T> {
    fn sort_by_containment(&mut self) {
        let srcs = self.iter().map(|item| item.src().clone()).collect::<Vec<_>>();
        let n = srcs.len();

        // how many remaining elements are strictly nested inside each one
        let mut nested = srcs
            .iter()
            .map(|a| {
                srcs.iter()
                    .filter(|b| cmp_containment(a, b) == Ordering::Greater)
                    .count()
            })
            .collect::<Vec<_>>();

        let mut rest = std::mem::take(self).into_iter().map(Some).collect::<Vec<_>>();
        while self.len() < n {
            let next = (0..n)
                .find(|&i| rest[i].is_some() && nested[i] == 0)
                .or_else(|| (0..n).find(|&i| rest[i].is_some()));
            let next = unless!(next, else break);
            let item = unless!(rest[next].take(), else break);

            for i in 0..n {
                if rest[i].is_some() && cmp_containment(&srcs[i], &srcs[next]) == Ordering::Greater {
                    nested[i] = nested[i].saturating_sub(1);
                }
            }
            self.push(item);
        }
    }
}
