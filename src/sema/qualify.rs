use super::{
    env::NameEnv,
    name::{ModuleName, Name},
};

/// Decides whether a rendered name carries its module prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Qualify {
    Never,
    Always,
    /// Qualify only names that would be ambiguous or are not in scope
    /// unqualified in the given environment.
    InScope(NameEnv),
}

impl Default for Qualify {
    fn default() -> Self {
        Qualify::Never
    }
}

impl Qualify {
    pub fn qualifier<'a>(&'a self, name: &'a Name) -> Option<&'a ModuleName> {
        if !name.is_external() || name.is_special() {
            return None;
        }

        match self {
            Qualify::Never => None,
            Qualify::Always => name.module.as_ref(),
            Qualify::InScope(env) => {
                if env.is_unambiguous_unqualified(name) {
                    None
                } else {
                    env.qualifier_for(name).or(name.module.as_ref())
                }
            }
        }
    }

    /// The name as it appears in prefix position, e.g. `M.f` or `(M.+)`.
    pub fn prefix(&self, name: &Name) -> String {
        let occ = self.occ(name);
        if name.is_operator() {
            format!("({})", occ)
        } else {
            occ
        }
    }

    /// The name as it appears in infix position, e.g. `M.+` or `` `M.f` ``.
    pub fn infix(&self, name: &Name) -> String {
        let occ = self.occ(name);
        if name.is_operator() {
            occ
        } else {
            format!("`{}`", occ)
        }
    }

    fn occ(&self, name: &Name) -> String {
        match self.qualifier(name) {
            Some(module) => format!("{}.{}", module, name.occ),
            None => name.occ.clone(),
        }
    }
}
