//! The two queries, run against a session.

use crate::{
    errors::{QueryError, QueryResult},
    ide::{self, TypedFragment},
    pathlib::FilePath,
    session::{LoadHowMuch, ModSummary, Session, TypecheckedModule},
    sort::SortByContainment,
    span::{Pos, Source},
};

/// A type-at-point result: the fragment's `(line, col, end line, end col)`
/// and its rendered type.
pub type SpanType = ((usize, usize, usize, usize), String);

#[derive(Debug)]
pub struct Driver<S> {
    session: S,
}

impl<S: Session> Driver<S> {
    pub fn new(session: S) -> Driver<S> {
        Driver { session }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn into_session(self) -> S {
        self.session
    }

    /// The types of every fragment around `pos`, innermost first.
    pub fn get_type(&mut self, path: &FilePath, pos: impl Into<Pos>) -> QueryResult<Vec<SpanType>> {
        let pos = pos.into();
        let tcm = self.load_module(path)?;

        let candidates = ide::search(&tcm.binds, pos);
        let fragments = ide::recover_types(&self.session, &tcm, &candidates);
        Ok(self.order_and_project(fragments))
    }

    /// The rendered info for every entity `ident` names in the module's
    /// scope.
    pub fn get_identifier_info(&mut self, path: &FilePath, ident: &str) -> QueryResult<String> {
        let summary = self.find_summary(path)?;
        self.session.set_context(&summary.module)?;
        ide::identifier_info(&self.session, ident)
    }

    fn order_and_project(&self, mut fragments: Vec<TypedFragment>) -> Vec<SpanType> {
        fragments.sort_by_containment();
        fragments
            .into_iter()
            .filter_map(|fragment| self.project(fragment))
            .collect()
    }

    fn project(&self, fragment: TypedFragment) -> Option<SpanType> {
        let span = unless!(fragment.src.to_tuple(), else {
            log::debug!("dropping {} without a span", fragment);
            return None;
        });
        Some((span, ide::render_type(&self.session, &fragment.ty)))
    }

    fn find_summary(&mut self, path: &FilePath) -> QueryResult<ModSummary> {
        let target = self.session.guess_target(path)?;
        self.session.set_targets(vec![target]);

        log::debug!("loading targets for {}", path);
        if !self.session.load(LoadHowMuch::AllTargets).succeeded() {
            return Err(QueryError::load_failure());
        }

        let graph = self.session.module_graph();
        log::debug!("module graph has {} module(s)", graph.len());
        graph
            .into_iter()
            .find(|summary| summary.is_for_file(path))
            .ok_or_else(|| QueryError::module_not_found().with_src(Source::from(path.clone())))
    }

    fn load_module(&mut self, path: &FilePath) -> QueryResult<TypecheckedModule> {
        let summary = self.find_summary(path)?;
        log::debug!("typechecking {}", summary.module);
        let parsed = self.session.parse_module(&summary)?;
        self.session.typecheck_module(parsed)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ide::{FragmentKind, TypedFragment},
        pathlib::FilePath,
        snapshot::{Snapshot, SnapshotSession},
        span::{Source, Span},
        typing::Ty,
    };

    use super::Driver;

    fn located(span: (usize, usize, usize, usize), ty: Ty) -> TypedFragment {
        TypedFragment::new(
            Source::new(FilePath::from("src/Main.hs"), Span::from(span)),
            ty,
            FragmentKind::Expression,
        )
    }

    #[test]
    fn fragments_without_a_span_are_dropped() {
        let driver = Driver::new(SnapshotSession::new(Snapshot::new()));
        let fragments = vec![
            located((3, 1, 3, 12), Ty::func(Ty::int(), Ty::int())),
            TypedFragment::new(
                Source::synthetic(FilePath::from("src/Main.hs")),
                Ty::char(),
                FragmentKind::Binding,
            ),
            located((3, 7, 3, 8), Ty::int()),
        ];

        assert_eq!(
            driver.order_and_project(fragments),
            vec![
                ((3, 7, 3, 8), "Int".to_string()),
                ((3, 1, 3, 12), "Int -> Int".to_string()),
            ]
        );
    }

    #[test]
    fn only_synthetic_fragments_project_to_nothing() {
        let driver = Driver::new(SnapshotSession::new(Snapshot::new()));
        let fragment = TypedFragment::new(
            Source::synthetic(FilePath::from("src/Main.hs")),
            Ty::int(),
            FragmentKind::Pattern,
        );
        assert!(driver.order_and_project(vec![fragment]).is_empty());
    }
}
