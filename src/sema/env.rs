use serde::{Deserialize, Serialize};

use super::name::{ModuleName, Name};

/// One name in scope: whether it can be referred to unqualified and the
/// module qualifiers it was imported under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEnvElt {
    pub name: Name,
    pub unqualified: bool,
    pub qualifiers: Vec<ModuleName>,
}

/// The names in scope at the top level of a module, in import order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEnv {
    elts: Vec<NameEnvElt>,
}

impl NameEnv {
    pub fn new() -> NameEnv {
        NameEnv { elts: vec![] }
    }

    pub fn add(&mut self, elt: NameEnvElt) {
        self.elts.push(elt);
    }

    /// Brings `name` into scope both unqualified and qualified by its
    /// defining module, like a plain `import M`.
    pub fn add_name(&mut self, name: Name) {
        let qualifiers = name.module.iter().cloned().collect();
        self.elts.push(NameEnvElt {
            name,
            unqualified: true,
            qualifiers,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &NameEnvElt> {
        self.elts.iter()
    }

    pub fn len(&self) -> usize {
        self.elts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elts.is_empty()
    }

    pub fn lookup_unqualified(&self, occ: &str) -> Vec<&Name> {
        self.elts
            .iter()
            .filter(|elt| elt.unqualified && elt.name.occ == occ)
            .map(|elt| &elt.name)
            .collect()
    }

    pub fn lookup_qualified(&self, module: &ModuleName, occ: &str) -> Vec<&Name> {
        self.elts
            .iter()
            .filter(|elt| elt.name.occ == occ && elt.qualifiers.contains(module))
            .map(|elt| &elt.name)
            .collect()
    }

    /// True if `name` is the only unqualified occurrence of its text in its
    /// namespace.
    pub fn is_unambiguous_unqualified(&self, name: &Name) -> bool {
        let mut found = false;
        for elt in self.elts.iter() {
            if !elt.unqualified || elt.name.occ != name.occ || elt.name.ns != name.ns {
                continue;
            }

            if &elt.name != name {
                return false;
            }
            found = true;
        }

        found
    }

    pub fn qualifier_for(&self, name: &Name) -> Option<&ModuleName> {
        self.elts
            .iter()
            .find(|elt| &elt.name == name)
            .and_then(|elt| elt.qualifiers.first())
    }
}

impl Extend<Name> for NameEnv {
    fn extend<T: IntoIterator<Item = Name>>(&mut self, iter: T) {
        for name in iter {
            self.add_name(name);
        }
    }
}

impl FromIterator<Name> for NameEnv {
    fn from_iter<T: IntoIterator<Item = Name>>(iter: T) -> Self {
        let mut env = NameEnv::new();
        env.extend(iter);
        env
    }
}

#[cfg(test)]
mod tests {
    use crate::sema::name::{ModuleName, Name};

    use super::{NameEnv, NameEnvElt};

    #[test]
    fn lookup_returns_both_namespaces_in_order() {
        let env: NameEnv = vec![
            Name::tycon("Data.Maybe", "Maybe"),
            Name::value("Data.Maybe", "Maybe"),
            Name::value("Data.Maybe", "Just"),
        ]
        .into_iter()
        .collect();

        let found = env.lookup_unqualified("Maybe");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], &Name::tycon("Data.Maybe", "Maybe"));
    }

    #[test]
    fn qualified_only_imports() {
        let mut env = NameEnv::new();
        env.add(NameEnvElt {
            name: Name::value("Data.Map", "lookup"),
            unqualified: false,
            qualifiers: vec![ModuleName::from("M")],
        });
        env.add_name(Name::value("Prelude", "lookup"));

        assert_eq!(env.lookup_unqualified("lookup").len(), 1);
        assert_eq!(
            env.lookup_qualified(&ModuleName::from("M"), "lookup"),
            vec![&Name::value("Data.Map", "lookup")]
        );
        assert!(env.is_unambiguous_unqualified(&Name::value("Prelude", "lookup")));
        assert!(!env.is_unambiguous_unqualified(&Name::value("Data.Map", "lookup")));
    }

    #[test]
    fn clashing_unqualified_names_are_ambiguous() {
        let env: NameEnv = vec![
            Name::value("Data.List", "insert"),
            Name::value("Data.Set", "insert"),
        ]
        .into_iter()
        .collect();
        assert!(!env.is_unambiguous_unqualified(&Name::value("Data.List", "insert")));
        assert_eq!(
            env.qualifier_for(&Name::value("Data.Set", "insert")),
            Some(&ModuleName::from("Data.Set"))
        );
    }
}
