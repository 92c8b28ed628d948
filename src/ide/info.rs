use fnv::FnvHashSet;

use crate::{
    errors::QueryResult,
    sema::Name,
    session::{NameResolution, PrettyPrinter},
    typing::{ClsInst, Fixity, TyThing},
};

use super::render_infos;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoEntry {
    pub thing: TyThing,
    pub fixity: Fixity,
    pub instances: Vec<ClsInst>,
}

/// Info for each name that has any, in the order the names resolved.
pub fn fetch_infos<S>(session: &S, names: &[Name]) -> Vec<InfoEntry>
where
    S: NameResolution + ?Sized,
{
    names
        .iter()
        .filter_map(|name| {
            let info = session.get_info(name);
            if info.is_none() {
                log::debug!("no info for {}", name);
            }
            info
        })
        .map(|(thing, fixity, instances)| InfoEntry {
            thing,
            fixity,
            instances,
        })
        .collect()
}

/// Drops every entry whose parent is itself one of the entries, keeping
/// the order of the rest.
pub fn filter_parented(infos: Vec<InfoEntry>) -> Vec<InfoEntry> {
    let names = infos
        .iter()
        .map(|info| info.thing.name().clone())
        .collect::<FnvHashSet<_>>();

    infos
        .into_iter()
        .filter(|info| match info.thing.parent() {
            Some(parent) if names.contains(parent) => {
                log::debug!("dropping {}: its parent {} is shown", info.thing.name(), parent);
                false
            }
            _ => true,
        })
        .collect()
}

pub fn identifier_info<S>(session: &S, ident: &str) -> QueryResult<String>
where
    S: NameResolution + PrettyPrinter + ?Sized,
{
    let names = session.parse_name(ident)?;
    let infos = filter_parented(fetch_infos(session, &names));
    Ok(render_infos(session, &infos, &session.print_unqual()))
}
