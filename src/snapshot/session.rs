use itertools::Itertools;

use crate::{
    ast::LExpr,
    errors::{QueryError, QueryErrorKind, QueryResult},
    lir::{self, CoreExpr},
    pathlib::FilePath,
    sema::{nameresolve, ModuleName, Name, NameEnv, Qualify},
    session::{
        Frontend, LoadHowMuch, Lowering, ModSummary, ModuleLoader, NameResolution,
        ParsedModule, PrettyPrinter, SuccessFlag, Target, TypecheckedModule,
    },
    typing::{ClsInst, Fixity, TyThing, TypeEnv},
};

use super::{ModuleSnapshot, Snapshot};

/// A session that answers from a typechecked snapshot instead of running
/// the compiler.
#[derive(Debug)]
pub struct SnapshotSession {
    snapshot: Snapshot,
    targets: Vec<Target>,
    loaded: bool,
    context: Option<ModuleName>,
}

impl SnapshotSession {
    pub fn new(snapshot: Snapshot) -> SnapshotSession {
        SnapshotSession {
            snapshot,
            targets: vec![],
            loaded: false,
            context: None,
        }
    }

    pub fn open(path: &FilePath) -> QueryResult<SnapshotSession> {
        Ok(SnapshotSession::new(super::read(path)?))
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn find_target(&self, target: &Target) -> Option<&ModuleSnapshot> {
        match target {
            Target::File(path) => self
                .snapshot
                .modules
                .iter()
                .find(|m| m.summary.is_for_file(path)),
            Target::Module(name) => self.snapshot.module(name),
        }
    }

    fn lookup_module(&self, name: &ModuleName) -> QueryResult<&ModuleSnapshot> {
        self.snapshot.module(name).ok_or_else(|| {
            QueryError::new(
                QueryErrorKind::Parse,
                format!("Could not find module ‘{}’", name),
            )
        })
    }

    fn context_module(&self) -> QueryResult<&ModuleSnapshot> {
        self.context
            .as_ref()
            .and_then(|name| self.snapshot.module(name))
            .ok_or_else(|| QueryError::new(QueryErrorKind::Name, "No module in context"))
    }

    /// The context module first, then every other module in graph order.
    fn scope(&self) -> impl Iterator<Item = &ModuleSnapshot> {
        let context = self.context.as_ref();
        let first = context.and_then(|name| self.snapshot.module(name));
        first.into_iter().chain(
            self.snapshot
                .modules
                .iter()
                .filter(move |m| Some(m.module()) != context),
        )
    }

    fn report(module: &ModuleSnapshot) {
        for diagnostic in module.diagnostics.iter() {
            log::debug!("[{}] {}", module.module(), diagnostic);
        }
    }
}

impl ModuleLoader for SnapshotSession {
    fn guess_target(&self, path: &FilePath) -> QueryResult<Target> {
        if path.is_empty() {
            return Err(QueryError::new(QueryErrorKind::Load, "empty target"));
        }

        let is_file = path.has_extension("hs")
            || path.has_extension("lhs")
            || path.to_string().contains('/');
        Ok(if is_file {
            Target::File(path.clone())
        } else {
            Target::Module(ModuleName::new(path.to_string()))
        })
    }

    fn set_targets(&mut self, targets: Vec<Target>) {
        log::debug!("targets: {}", targets.iter().join(", "));
        self.targets = targets;
    }

    fn load(&mut self, how_much: LoadHowMuch) -> SuccessFlag {
        self.loaded = true;
        match how_much {
            LoadHowMuch::AllTargets => {
                for target in self.targets.iter() {
                    if self.find_target(target).is_none() {
                        log::warn!("target {} is not in the snapshot", target);
                    }
                }

                let mut flag = SuccessFlag::Succeeded;
                for module in self.snapshot.modules.iter().filter(|m| m.has_errors()) {
                    SnapshotSession::report(module);
                    flag = SuccessFlag::Failed;
                }
                flag
            }
            LoadHowMuch::UpTo(name) => match self.snapshot.module(&name) {
                Some(module) if module.has_errors() => {
                    SnapshotSession::report(module);
                    SuccessFlag::Failed
                }
                Some(_) => SuccessFlag::Succeeded,
                None => {
                    log::debug!("cannot load up to unknown module {}", name);
                    SuccessFlag::Failed
                }
            },
        }
    }

    fn module_graph(&self) -> Vec<ModSummary> {
        if !self.loaded {
            return vec![];
        }

        self.snapshot
            .modules
            .iter()
            .map(|m| m.summary.clone())
            .collect()
    }

    fn set_context(&mut self, module: &ModuleName) -> QueryResult {
        if self.snapshot.module(module).is_none() {
            return Err(QueryError::new(
                QueryErrorKind::Name,
                format!("Could not find module ‘{}’", module),
            ));
        }

        self.context = Some(module.clone());
        Ok(())
    }
}

impl Frontend for SnapshotSession {
    fn parse_module(&mut self, summary: &ModSummary) -> QueryResult<ParsedModule> {
        let module = self.lookup_module(&summary.module)?;
        Ok(ParsedModule {
            summary: module.summary.clone(),
        })
    }

    fn typecheck_module(&mut self, parsed: ParsedModule) -> QueryResult<TypecheckedModule> {
        let module = self.lookup_module(&parsed.summary.module)?;
        Ok(TypecheckedModule {
            summary: parsed.summary,
            binds: module.binds.clone(),
            name_env: module.name_env.clone(),
            type_env: module.type_env.clone(),
        })
    }
}

impl Lowering for SnapshotSession {
    fn lower_expr(
        &self,
        module: &ModuleName,
        name_env: &NameEnv,
        type_env: &TypeEnv,
        expr: &LExpr,
    ) -> Option<CoreExpr> {
        lir::lower_expr(module, name_env, type_env, expr)
    }
}

impl NameResolution for SnapshotSession {
    fn parse_name(&self, input: &str) -> QueryResult<Vec<Name>> {
        let context = self.context_module()?;
        nameresolve::parse_name(&context.name_env, input)
    }

    fn get_info(&self, name: &Name) -> Option<(TyThing, Fixity, Vec<ClsInst>)> {
        let thing = self
            .scope()
            .find_map(|m| m.type_env.lookup(name))?
            .clone();
        let fixity = self
            .scope()
            .find_map(|m| m.type_env.fixity(name))
            .unwrap_or(Fixity::DEFAULT);

        let mut instances: Vec<ClsInst> = vec![];
        for module in self.snapshot.modules.iter() {
            for inst in module.type_env.instances_for(&thing) {
                if !instances.contains(&inst) {
                    instances.push(inst);
                }
            }
        }

        Some((thing, fixity, instances))
    }

    fn print_unqual(&self) -> Qualify {
        match self.context_module() {
            Ok(context) => Qualify::InScope(context.name_env.clone()),
            Err(_) => Qualify::Always,
        }
    }
}

impl PrettyPrinter for SnapshotSession {}

#[cfg(test)]
mod tests {
    use crate::{
        errors::QueryErrorKind,
        pathlib::FilePath,
        sema::{Name, NameEnv},
        session::{
            Frontend, LoadHowMuch, ModSummary, ModuleLoader, NameResolution, SuccessFlag,
            Target,
        },
        snapshot::{ModuleSnapshot, Snapshot},
        typing::{ClsInst, Fixity, Ty, TyThing, TypeEnv},
    };

    use super::SnapshotSession;

    fn greeting() -> Name {
        Name::value("Lib", "greeting")
    }

    fn session() -> SnapshotSession {
        let mut lib_types = TypeEnv::new();
        lib_types.add_thing(TyThing::Id {
            name: greeting(),
            ty: Ty::string(),
            parent: None,
        });
        lib_types.add_instance(ClsInst::new(Name::tycon("GHC.Show", "Show"), vec![Ty::int()]));
        let lib = ModuleSnapshot::new(
            ModSummary::new("Lib".into(), Some(FilePath::from("src/Lib.hs"))),
            vec![greeting()].into_iter().collect(),
            lib_types,
        );

        let main = ModuleSnapshot::new(
            ModSummary::new("Main".into(), Some(FilePath::from("src/Main.hs"))),
            vec![greeting()].into_iter().collect::<NameEnv>(),
            TypeEnv::new(),
        );

        let mut snapshot = Snapshot::new();
        snapshot.add_module(lib);
        snapshot.add_module(main);
        SnapshotSession::new(snapshot)
    }

    #[test]
    fn guesses_files_and_modules() {
        let session = session();
        assert_eq!(
            session.guess_target(&FilePath::from("src/Main.hs")).unwrap(),
            Target::File(FilePath::from("src/Main.hs"))
        );
        assert_eq!(
            session.guess_target(&FilePath::from("Data.Map")).unwrap(),
            Target::Module("Data.Map".into())
        );
        assert_eq!(
            session.guess_target(&FilePath::from("Main.lhs")).unwrap(),
            Target::File(FilePath::from("Main.lhs"))
        );
        assert_eq!(
            session.guess_target(&FilePath::from("Main")).unwrap(),
            Target::Module("Main".into())
        );
        assert!(session.guess_target(&FilePath::new()).is_err());
    }

    #[test]
    fn module_graph_is_empty_until_loaded() {
        let mut session = session();
        assert!(session.module_graph().is_empty());
        session.set_targets(vec![Target::File(FilePath::from("src/Main.hs"))]);
        assert_eq!(session.load(LoadHowMuch::AllTargets), SuccessFlag::Succeeded);
        assert_eq!(session.module_graph().len(), 2);
    }

    #[test]
    fn diagnostics_fail_the_load() {
        let mut session = session();
        session.snapshot.modules[0]
            .diagnostics
            .push(str!("src/Lib.hs:3:1: error: Variable not in scope"));
        assert_eq!(session.load(LoadHowMuch::AllTargets), SuccessFlag::Failed);
        assert_eq!(session.load(LoadHowMuch::UpTo("Main".into())), SuccessFlag::Succeeded);
        assert_eq!(session.load(LoadHowMuch::UpTo("Lib".into())), SuccessFlag::Failed);
        assert_eq!(session.load(LoadHowMuch::UpTo("Other".into())), SuccessFlag::Failed);
    }

    #[test]
    fn unknown_modules_do_not_parse() {
        let mut session = session();
        let summary = ModSummary::new("Other".into(), None);
        let err = session.parse_module(&summary).unwrap_err();
        assert_eq!(err.kind, QueryErrorKind::Parse);
    }

    #[test]
    fn names_need_a_context() {
        let mut session = session();
        let err = session.parse_name("greeting").unwrap_err();
        assert_eq!(err.kind, QueryErrorKind::Name);

        session.set_context(&"Main".into()).unwrap();
        assert_eq!(session.parse_name("greeting").unwrap(), vec![greeting()]);
    }

    #[test]
    fn info_falls_back_to_other_modules() {
        let mut session = session();
        session.set_context(&"Main".into()).unwrap();
        let (thing, fixity, instances) = session.get_info(&greeting()).unwrap();
        assert_eq!(thing.name(), &greeting());
        assert_eq!(fixity, Fixity::DEFAULT);
        assert!(instances.is_empty());
        assert!(session.get_info(&Name::value("Lib", "missing")).is_none());
    }
}
