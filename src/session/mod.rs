//! The compiler session the queries run against.
//!
//! Module loading, parsing, typechecking, lowering, name resolution and
//! pretty printing all belong to the host session. The query driver only
//! sees them through the traits here and is generic over any `Session`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    ast::{LBind, LExpr},
    errors::QueryResult,
    lir::{self, CoreExpr},
    pathlib::FilePath,
    sema::{ModuleName, Name, NameEnv, Qualify},
    typing::{pretty, ClsInst, Fixity, Ty, TyThing, TypeEnv},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    File(FilePath),
    Module(ModuleName),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::File(path) => write!(f, "{}", path),
            Target::Module(module) => write!(f, "{}", module),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadHowMuch {
    AllTargets,
    UpTo(ModuleName),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SuccessFlag {
    Succeeded,
    Failed,
}

impl SuccessFlag {
    pub fn succeeded(self) -> bool {
        matches!(self, SuccessFlag::Succeeded)
    }
}

/// A module in the module graph and the source file it came from, if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModSummary {
    pub module: ModuleName,
    pub hs_file: Option<FilePath>,
}

impl ModSummary {
    pub fn new(module: ModuleName, hs_file: Option<FilePath>) -> ModSummary {
        ModSummary { module, hs_file }
    }

    pub fn is_for_file(&self, path: &FilePath) -> bool {
        self.hs_file
            .as_ref()
            .map_or(false, |file| file.same_file(path))
    }
}

#[derive(Clone, Debug)]
pub struct ParsedModule {
    pub summary: ModSummary,
}

#[derive(Clone, Debug)]
pub struct TypecheckedModule {
    pub summary: ModSummary,
    pub binds: Vec<LBind>,
    pub name_env: NameEnv,
    pub type_env: TypeEnv,
}

impl TypecheckedModule {
    pub fn module(&self) -> &ModuleName {
        &self.summary.module
    }
}

pub trait ModuleLoader {
    fn guess_target(&self, path: &FilePath) -> QueryResult<Target>;

    fn set_targets(&mut self, targets: Vec<Target>);

    fn load(&mut self, how_much: LoadHowMuch) -> SuccessFlag;

    fn module_graph(&self) -> Vec<ModSummary>;

    /// Makes `module` the scope names are parsed and printed in.
    fn set_context(&mut self, module: &ModuleName) -> QueryResult;
}

pub trait Frontend {
    fn parse_module(&mut self, summary: &ModSummary) -> QueryResult<ParsedModule>;

    fn typecheck_module(&mut self, parsed: ParsedModule) -> QueryResult<TypecheckedModule>;
}

pub trait Lowering {
    /// Lowers a typechecked expression. `None` means the expression has
    /// no lowered form, which is not an error.
    fn lower_expr(
        &self,
        module: &ModuleName,
        name_env: &NameEnv,
        type_env: &TypeEnv,
        expr: &LExpr,
    ) -> Option<CoreExpr>;

    fn type_of(&self, expr: &CoreExpr) -> Ty {
        lir::expr_type(expr)
    }
}

pub trait NameResolution {
    fn parse_name(&self, input: &str) -> QueryResult<Vec<Name>>;

    fn get_info(&self, name: &Name) -> Option<(TyThing, Fixity, Vec<ClsInst>)>;

    /// The qualification policy of the current context.
    fn print_unqual(&self) -> Qualify;
}

pub trait PrettyPrinter {
    fn render_type(&self, ty: &Ty, q: &Qualify) -> String {
        pretty::render_type(ty, q)
    }

    fn render_info(
        &self,
        thing: &TyThing,
        fixity: &Fixity,
        instances: &[ClsInst],
        q: &Qualify,
    ) -> String {
        pretty::render_info(thing, fixity, instances, q)
    }
}

pub trait Session: ModuleLoader + Frontend + Lowering + NameResolution + PrettyPrinter {}

impl<T> Session for T where T: ModuleLoader + Frontend + Lowering + NameResolution + PrettyPrinter {}
