//! Typechecked snapshots.
//!
//! A snapshot is the serialized output of a finished typechecking run:
//! every module in the graph with its typechecked bindings, environments
//! and whatever diagnostics the run reported for it.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::{
    ast::LBind,
    errors::QueryResult,
    pathlib::FilePath,
    sema::{ModuleName, NameEnv},
    session::ModSummary,
    typing::TypeEnv,
};

mod session;

pub use session::SnapshotSession;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSnapshot {
    pub summary: ModSummary,
    pub binds: Vec<LBind>,
    pub name_env: NameEnv,
    pub type_env: TypeEnv,
    pub diagnostics: Vec<String>,
}

impl ModuleSnapshot {
    pub fn new(summary: ModSummary, name_env: NameEnv, type_env: TypeEnv) -> ModuleSnapshot {
        ModuleSnapshot {
            summary,
            binds: vec![],
            name_env,
            type_env,
            diagnostics: vec![],
        }
    }

    pub fn module(&self) -> &ModuleName {
        &self.summary.module
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub modules: Vec<ModuleSnapshot>,
}

impl Snapshot {
    pub fn new() -> Snapshot {
        Snapshot::default()
    }

    /// Adds a module, replacing any earlier snapshot of the same module.
    pub fn add_module(&mut self, module: ModuleSnapshot) {
        match self
            .modules
            .iter_mut()
            .find(|m| m.module() == module.module())
        {
            Some(existing) => *existing = module,
            None => self.modules.push(module),
        }
    }

    pub fn module(&self, name: &ModuleName) -> Option<&ModuleSnapshot> {
        self.modules.iter().find(|m| m.module() == name)
    }

    pub fn to_bytes(&self) -> QueryResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> QueryResult<Snapshot> {
        Ok(bincode::deserialize(bytes)?)
    }
}

pub fn read(path: &FilePath) -> QueryResult<Snapshot> {
    log::debug!("reading snapshot from {}", path);
    let bytes = fs::read(path)?;
    let snapshot = Snapshot::from_bytes(&bytes)?;
    log::debug!("snapshot has {} module(s)", snapshot.modules.len());
    Ok(snapshot)
}

pub fn write(path: &FilePath, snapshot: &Snapshot) -> QueryResult {
    let bytes = snapshot.to_bytes()?;
    log::info!("writing snapshot to {}", path);
    fs::write(path, bytes)?;
    Ok(())
}
