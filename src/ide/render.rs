use itertools::Itertools;

use crate::{
    sema::Qualify,
    session::PrettyPrinter,
    typing::Ty,
};

use super::InfoEntry;

/// Types are always rendered unqualified.
pub fn render_type<S>(session: &S, ty: &Ty) -> String
where
    S: PrettyPrinter + ?Sized,
{
    session.render_type(ty, &Qualify::Never)
}

/// One block per entry, separated by blank lines.
pub fn render_infos<S>(session: &S, infos: &[InfoEntry], q: &Qualify) -> String
where
    S: PrettyPrinter + ?Sized,
{
    infos
        .iter()
        .map(|info| session.render_info(&info.thing, &info.fixity, &info.instances, q))
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use crate::{
        sema::{Name, Qualify},
        session::PrettyPrinter,
        typing::{Fixity, Ty, TyThing},
    };

    use super::{render_infos, render_type, InfoEntry};

    struct Printer;

    impl PrettyPrinter for Printer {}

    #[test]
    fn types_are_unqualified() {
        let maybe = Name::tycon("GHC.Maybe", "Maybe");
        let ty = Ty::func(Ty::var("a"), Ty::con(maybe, vec![Ty::var("a")]));
        assert_eq!(render_type(&Printer, &ty), "a -> Maybe a");
    }

    #[test]
    fn blocks_are_separated_by_a_blank_line() {
        let entry = |module: &str| InfoEntry {
            thing: TyThing::Id {
                name: Name::value(module, "x"),
                ty: Ty::int(),
                parent: None,
            },
            fixity: Fixity::DEFAULT,
            instances: vec![],
        };
        let text = render_infos(&Printer, &[entry("A"), entry("B")], &Qualify::Never);
        assert_eq!(
            text,
            "x :: Int\t-- Defined in ‘A’\n\nx :: Int\t-- Defined in ‘B’"
        );
        assert_eq!(render_infos(&Printer, &[], &Qualify::Never), "");
    }
}
