pub mod pretty;
pub mod thing;
pub mod ty;

pub use thing::{Assoc, ClsInst, DataConSig, Fixity, MethodSig, TyThing, TypeEnv};
pub use ty::{Pred, Subst, Ty, TyVar};
