use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

use crate::sema::{ModuleName, Name};

use super::ty::{Pred, Ty, TyVar};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assoc {
    Left,
    Right,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixity {
    pub prec: u8,
    pub assoc: Assoc,
}

impl Fixity {
    /// Operators without a declaration are `infixl 9`.
    pub const DEFAULT: Fixity = Fixity {
        prec: 9,
        assoc: Assoc::Left,
    };

    pub fn new(prec: u8, assoc: Assoc) -> Fixity {
        Fixity { prec, assoc }
    }

    pub fn is_default(&self) -> bool {
        *self == Fixity::DEFAULT
    }

    pub fn keyword(&self) -> &'static str {
        match self.assoc {
            Assoc::Left => "infixl",
            Assoc::Right => "infixr",
            Assoc::None => "infix",
        }
    }
}

impl Default for Fixity {
    fn default() -> Self {
        Fixity::DEFAULT
    }
}

/// A class instance, e.g. `instance Eq a => Eq [a]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClsInst {
    pub class: Name,
    pub tys: Vec<Ty>,
    pub context: Vec<Pred>,
    pub module: Option<ModuleName>,
}

impl ClsInst {
    pub fn new(class: Name, tys: Vec<Ty>) -> ClsInst {
        ClsInst {
            class,
            tys,
            context: vec![],
            module: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConSig {
    pub name: Name,
    pub fields: Vec<Ty>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSig {
    pub name: Name,
    pub ty: Ty,
}

/// Everything the typechecker knows about a top-level name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TyThing {
    /// Functions, values, record selectors and class methods. Selectors
    /// and methods have their type or class as parent.
    Id {
        name: Name,
        ty: Ty,
        parent: Option<Name>,
    },
    DataCon {
        name: Name,
        ty: Ty,
        parent: Name,
    },
    TyCon {
        name: Name,
        vars: Vec<TyVar>,
        data_cons: Vec<DataConSig>,
    },
    Class {
        name: Name,
        vars: Vec<TyVar>,
        methods: Vec<MethodSig>,
    },
}

impl TyThing {
    pub fn name(&self) -> &Name {
        match self {
            TyThing::Id { name, .. }
            | TyThing::DataCon { name, .. }
            | TyThing::TyCon { name, .. }
            | TyThing::Class { name, .. } => name,
        }
    }

    pub fn parent(&self) -> Option<&Name> {
        match self {
            TyThing::Id { parent, .. } => parent.as_ref(),
            TyThing::DataCon { parent, .. } => Some(parent),
            TyThing::TyCon { .. } | TyThing::Class { .. } => None,
        }
    }
}

/// The typechecker's view of the names a module can see: their
/// `TyThing`s, fixities, visible instances and the evidence bound for
/// class constraints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEnv {
    things: FnvHashMap<Name, TyThing>,
    fixities: FnvHashMap<Name, Fixity>,
    instances: Vec<ClsInst>,
    evidence: FnvHashMap<Name, Pred>,
}

impl TypeEnv {
    pub fn new() -> TypeEnv {
        TypeEnv::default()
    }

    pub fn add_thing(&mut self, thing: TyThing) {
        self.things.insert(thing.name().clone(), thing);
    }

    pub fn lookup(&self, name: &Name) -> Option<&TyThing> {
        self.things.get(name)
    }

    pub fn set_fixity(&mut self, name: Name, fixity: Fixity) {
        self.fixities.insert(name, fixity);
    }

    pub fn fixity(&self, name: &Name) -> Option<Fixity> {
        self.fixities.get(name).copied()
    }

    pub fn add_instance(&mut self, inst: ClsInst) {
        self.instances.push(inst);
    }

    pub fn instances(&self) -> &[ClsInst] {
        &self.instances
    }

    /// Instances that describe `thing`: a class's instances, or the
    /// instances whose head mentions a type constructor. Kept in
    /// declaration order.
    pub fn instances_for(&self, thing: &TyThing) -> Vec<ClsInst> {
        self.instances
            .iter()
            .filter(|inst| match thing {
                TyThing::Class { name, .. } => &inst.class == name,
                TyThing::TyCon { name, .. } => inst.tys.iter().any(|ty| ty.mentions(name)),
                TyThing::Id { .. } | TyThing::DataCon { .. } => false,
            })
            .cloned()
            .collect()
    }

    pub fn bind_evidence(&mut self, var: Name, pred: Pred) {
        self.evidence.insert(var, pred);
    }

    pub fn evidence(&self, var: &Name) -> Option<&Pred> {
        self.evidence.get(var)
    }
}
