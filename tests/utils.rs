#![cfg(test)]

//! A small typechecked program and the library modules it imports:
//!
//! ```haskell
//! module Main where
//!
//! f x = x + 1
//!
//! g (Just y) = y
//! g Nothing = 0
//!
//! Just k = Just 'c'
//!
//! e = 'c' == 'd'
//! ```
//!
//! `f` is generalised in an `AbsBinds` group and its `+` is elaborated with
//! the `Num Int` dictionary. The `Eq Char` dictionary used by `e` is not
//! bound in the type environment, so `==` and `'c' == 'd'` don't lower.

use tyquery::{
    ast::{
        AbsBinds, AbsExport, Bind, Expr, FunBind, Grhs, Grhss, Id, LBind, LExpr, Lit, Match,
        MatchGroup, Pat, PatBind, VarBind, WrapStep,
    },
    pathlib::FilePath,
    sema::{
        name::{
            BOOL_TYCON, CHAR_TYCON, CONS_DATACON, FALSE_DATACON, INT_TYCON, LIST_TYCON,
            NIL_DATACON, TRUE_DATACON,
        },
        ModuleName, Name, NameEnv,
    },
    session::ModSummary,
    snapshot::{ModuleSnapshot, Snapshot, SnapshotSession},
    span::{Located, Source, Span},
    typing::{Assoc, ClsInst, DataConSig, Fixity, MethodSig, Pred, Ty, TyThing, TyVar, TypeEnv},
    Driver,
};

pub const MAIN_FILE: &str = "src/Main.hs";

#[allow(dead_code)]
pub fn enable_debug_logs() {
    fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .chain(std::io::stderr())
        .apply()
        .unwrap();
}

pub fn main_path() -> FilePath {
    FilePath::from(MAIN_FILE)
}

pub fn driver() -> Driver<SnapshotSession> {
    Driver::new(SnapshotSession::new(snapshot()))
}

#[allow(dead_code)]
pub fn driver_for(snapshot: Snapshot) -> Driver<SnapshotSession> {
    Driver::new(SnapshotSession::new(snapshot))
}

fn loc<T>(value: T, span: (usize, usize, usize, usize)) -> Located<T> {
    Located::new(value, Source::new(main_path(), Span::from(span)))
}

fn synthetic<T>(value: T) -> Located<T> {
    Located::new(value, Source::synthetic(main_path()))
}

fn a() -> Ty {
    Ty::var("a")
}

fn forall_a(ty: Ty) -> Ty {
    Ty::forall(vec![TyVar::new("a")], ty)
}

fn maybe_tycon() -> Name {
    Name::tycon("GHC.Maybe", "Maybe")
}

fn just() -> Name {
    Name::value("GHC.Maybe", "Just")
}

fn nothing() -> Name {
    Name::value("GHC.Maybe", "Nothing")
}

fn maybe(ty: Ty) -> Ty {
    Ty::con(maybe_tycon(), vec![ty])
}

fn num() -> Name {
    Name::tycon("GHC.Num", "Num")
}

fn plus() -> Name {
    Name::value("GHC.Num", "+")
}

fn eq() -> Name {
    Name::tycon("GHC.Classes", "Eq")
}

fn eq_op() -> Name {
    Name::value("GHC.Classes", "==")
}

fn record_tycon(module: &str) -> Name {
    Name::tycon(module, module)
}

fn record_field(module: &str) -> Name {
    Name::value(module, "name")
}

fn main_name(occ: &str) -> Name {
    Name::value("Main", occ)
}

fn plus_ty() -> Ty {
    forall_a(Ty::qualified(
        vec![Pred::new(num(), vec![a()])],
        Ty::funcs(vec![a(), a()], a()),
    ))
}

fn eq_op_ty() -> Ty {
    forall_a(Ty::qualified(
        vec![Pred::new(eq(), vec![a()])],
        Ty::funcs(vec![a(), a()], Ty::bool()),
    ))
}

fn just_ty() -> Ty {
    forall_a(Ty::func(a(), maybe(a())))
}

fn instance(module: &str, class: Name, ty: Ty) -> ClsInst {
    ClsInst {
        module: Some(ModuleName::from(module)),
        ..ClsInst::new(class, vec![ty])
    }
}

fn module(name: &str, file: Option<&str>, things: Vec<TyThing>) -> ModuleSnapshot {
    let mut type_env = TypeEnv::new();
    for thing in things {
        type_env.add_thing(thing);
    }

    ModuleSnapshot::new(
        ModSummary::new(ModuleName::from(name), file.map(|f| FilePath::from(f))),
        NameEnv::new(),
        type_env,
    )
}

fn ghc_types() -> ModuleSnapshot {
    let prim = |name: &Name| TyThing::TyCon {
        name: name.clone(),
        vars: vec![],
        data_cons: vec![],
    };
    let nullary = |name: &Name| DataConSig {
        name: name.clone(),
        fields: vec![],
    };

    let mut types = module(
        "GHC.Types",
        None,
        vec![
            prim(&INT_TYCON),
            prim(&CHAR_TYCON),
            TyThing::TyCon {
                name: BOOL_TYCON.clone(),
                vars: vec![],
                data_cons: vec![nullary(&FALSE_DATACON), nullary(&TRUE_DATACON)],
            },
            TyThing::DataCon {
                name: TRUE_DATACON.clone(),
                ty: Ty::bool(),
                parent: BOOL_TYCON.clone(),
            },
            TyThing::DataCon {
                name: FALSE_DATACON.clone(),
                ty: Ty::bool(),
                parent: BOOL_TYCON.clone(),
            },
            TyThing::TyCon {
                name: LIST_TYCON.clone(),
                vars: vec![TyVar::new("a")],
                data_cons: vec![
                    nullary(&NIL_DATACON),
                    DataConSig {
                        name: CONS_DATACON.clone(),
                        fields: vec![a(), Ty::list(a())],
                    },
                ],
            },
            TyThing::DataCon {
                name: NIL_DATACON.clone(),
                ty: forall_a(Ty::list(a())),
                parent: LIST_TYCON.clone(),
            },
            TyThing::DataCon {
                name: CONS_DATACON.clone(),
                ty: forall_a(Ty::funcs(vec![a(), Ty::list(a())], Ty::list(a()))),
                parent: LIST_TYCON.clone(),
            },
        ],
    );
    types
        .type_env
        .set_fixity(CONS_DATACON.clone(), Fixity::new(5, Assoc::Right));
    types
}

fn ghc_maybe() -> ModuleSnapshot {
    module(
        "GHC.Maybe",
        None,
        vec![
            TyThing::TyCon {
                name: maybe_tycon(),
                vars: vec![TyVar::new("a")],
                data_cons: vec![
                    DataConSig {
                        name: nothing(),
                        fields: vec![],
                    },
                    DataConSig {
                        name: just(),
                        fields: vec![a()],
                    },
                ],
            },
            TyThing::DataCon {
                name: just(),
                ty: just_ty(),
                parent: maybe_tycon(),
            },
            TyThing::DataCon {
                name: nothing(),
                ty: forall_a(maybe(a())),
                parent: maybe_tycon(),
            },
        ],
    )
}

fn ghc_num() -> ModuleSnapshot {
    let mut num_mod = module(
        "GHC.Num",
        None,
        vec![
            TyThing::Class {
                name: num(),
                vars: vec![TyVar::new("a")],
                methods: vec![MethodSig {
                    name: plus(),
                    ty: Ty::funcs(vec![a(), a()], a()),
                }],
            },
            TyThing::Id {
                name: plus(),
                ty: plus_ty(),
                parent: Some(num()),
            },
        ],
    );
    num_mod
        .type_env
        .set_fixity(plus(), Fixity::new(6, Assoc::Left));
    num_mod
        .type_env
        .add_instance(instance("GHC.Num", num(), Ty::int()));
    num_mod
}

fn ghc_classes() -> ModuleSnapshot {
    let mut classes = module(
        "GHC.Classes",
        None,
        vec![
            TyThing::Class {
                name: eq(),
                vars: vec![TyVar::new("a")],
                methods: vec![MethodSig {
                    name: eq_op(),
                    ty: Ty::funcs(vec![a(), a()], Ty::bool()),
                }],
            },
            TyThing::Id {
                name: eq_op(),
                ty: eq_op_ty(),
                parent: Some(eq()),
            },
        ],
    );
    classes
        .type_env
        .set_fixity(eq_op(), Fixity::new(4, Assoc::None));
    classes
        .type_env
        .add_instance(instance("GHC.Classes", eq(), Ty::int()));
    classes
        .type_env
        .add_instance(instance("GHC.Classes", eq(), Ty::char()));
    classes
}

/// `data M = M { name :: String }`
fn record(name: &str) -> ModuleSnapshot {
    let file = format!("src/{}.hs", name);
    module(
        name,
        Some(&file),
        vec![
            TyThing::TyCon {
                name: record_tycon(name),
                vars: vec![],
                data_cons: vec![DataConSig {
                    name: Name::value(name, name),
                    fields: vec![Ty::string()],
                }],
            },
            TyThing::Id {
                name: record_field(name),
                ty: Ty::func(Ty::con(record_tycon(name), vec![]), Ty::string()),
                parent: Some(record_tycon(name)),
            },
        ],
    )
}

fn rhs(body: LExpr, span: (usize, usize, usize, usize)) -> Grhss {
    Grhss {
        grhss: vec![loc(
            Grhs {
                guards: vec![],
                body,
            },
            span,
        )],
        local_binds: vec![],
    }
}

/// `$dNumInt = $fNumInt`, invented by the typechecker.
fn dict_bind() -> LBind {
    let dict_ty = Pred::new(num(), vec![Ty::int()]).dict_ty();
    synthetic(Bind::Var(VarBind {
        id: Id::new(Name::local("$dNumInt"), dict_ty.clone()),
        rhs: synthetic(Expr::Var(Id::new(
            Name::value("GHC.Num", "$fNumInt"),
            dict_ty,
        ))),
    }))
}

/// `f x = x + 1`
fn f_bind() -> LBind {
    let x = Id::new(Name::local("x"), Ty::int());
    let f_mono = Id::new(Name::local("f"), Ty::func(Ty::int(), Ty::int()));

    let op = loc(
        Expr::Wrap(
            vec![
                WrapStep::TyApp(Ty::int()),
                WrapStep::EvApp(Name::local("$dNumInt")),
            ],
            Box::new(Expr::Var(Id::new(plus(), plus_ty()))),
        ),
        (3, 9, 3, 10),
    );
    let body = loc(
        Expr::OpApp(
            Box::new(loc(Expr::Var(x.clone()), (3, 7, 3, 8))),
            Box::new(op),
            Box::new(loc(Expr::OverLit(Lit::Int(1), Ty::int()), (3, 11, 3, 12))),
        ),
        (3, 7, 3, 12),
    );
    let matches = MatchGroup {
        alts: vec![loc(
            Match {
                pats: vec![loc(Pat::Var(x), (3, 3, 3, 4))],
                grhss: rhs(body, (3, 5, 3, 12)),
            },
            (3, 1, 3, 12),
        )],
        arg_tys: vec![Ty::int()],
        res_ty: Ty::int(),
    };
    let fun = loc(
        Bind::Fun(FunBind {
            id: loc(f_mono.clone(), (3, 1, 3, 2)),
            matches,
        }),
        (3, 1, 3, 12),
    );

    loc(
        Bind::Abs(AbsBinds {
            tyvars: vec![],
            evidence: vec![],
            exports: vec![AbsExport {
                poly: Id::new(main_name("f"), Ty::func(Ty::int(), Ty::int())),
                mono: f_mono,
            }],
            binds: vec![fun],
        }),
        (3, 1, 3, 12),
    )
}

/// ```haskell
/// g (Just y) = y
/// g Nothing = 0
/// ```
fn g_bind() -> LBind {
    let y = Id::new(Name::local("y"), Ty::int());
    let just_y = loc(
        Pat::Con {
            con: just(),
            args: vec![loc(Pat::Var(y.clone()), (5, 9, 5, 10))],
            ty: maybe(Ty::int()),
        },
        (5, 4, 5, 10),
    );
    let first = loc(
        Match {
            pats: vec![loc(Pat::Par(Box::new(just_y)), (5, 3, 5, 11))],
            grhss: rhs(loc(Expr::Var(y), (5, 14, 5, 15)), (5, 12, 5, 15)),
        },
        (5, 1, 5, 15),
    );
    let second = loc(
        Match {
            pats: vec![loc(
                Pat::Con {
                    con: nothing(),
                    args: vec![],
                    ty: maybe(Ty::int()),
                },
                (6, 3, 6, 10),
            )],
            grhss: rhs(
                loc(Expr::OverLit(Lit::Int(0), Ty::int()), (6, 13, 6, 14)),
                (6, 11, 6, 14),
            ),
        },
        (6, 1, 6, 14),
    );

    let g_ty = Ty::func(maybe(Ty::int()), Ty::int());
    loc(
        Bind::Fun(FunBind {
            id: loc(Id::new(main_name("g"), g_ty), (5, 1, 5, 2)),
            matches: MatchGroup {
                alts: vec![first, second],
                arg_tys: vec![maybe(Ty::int())],
                res_ty: Ty::int(),
            },
        }),
        (5, 1, 6, 14),
    )
}

/// `Just k = Just 'c'`
fn k_bind() -> LBind {
    let lhs = loc(
        Pat::Con {
            con: just(),
            args: vec![loc(
                Pat::Var(Id::new(main_name("k"), Ty::char())),
                (8, 6, 8, 7),
            )],
            ty: maybe(Ty::char()),
        },
        (8, 1, 8, 7),
    );
    let just_char = loc(
        Expr::Wrap(
            vec![WrapStep::TyApp(Ty::char())],
            Box::new(Expr::Var(Id::new(just(), just_ty()))),
        ),
        (8, 10, 8, 14),
    );
    let app = loc(
        Expr::App(
            Box::new(just_char),
            Box::new(loc(Expr::Lit(Lit::Char('c')), (8, 15, 8, 18))),
        ),
        (8, 10, 8, 18),
    );

    loc(
        Bind::Pat(PatBind {
            lhs,
            rhs: rhs(app, (8, 8, 8, 18)),
        }),
        (8, 1, 8, 18),
    )
}

/// `e = 'c' == 'd'`
fn e_bind() -> LBind {
    let op = loc(
        Expr::Wrap(
            vec![
                WrapStep::TyApp(Ty::char()),
                WrapStep::EvApp(Name::local("$dEqChar")),
            ],
            Box::new(Expr::Var(Id::new(eq_op(), eq_op_ty()))),
        ),
        (10, 9, 10, 11),
    );
    let body = loc(
        Expr::OpApp(
            Box::new(loc(Expr::Lit(Lit::Char('c')), (10, 5, 10, 8))),
            Box::new(op),
            Box::new(loc(Expr::Lit(Lit::Char('d')), (10, 12, 10, 15))),
        ),
        (10, 5, 10, 15),
    );

    loc(
        Bind::Fun(FunBind {
            id: loc(Id::new(main_name("e"), Ty::bool()), (10, 1, 10, 2)),
            matches: MatchGroup {
                alts: vec![loc(
                    Match {
                        pats: vec![],
                        grhss: rhs(body, (10, 3, 10, 15)),
                    },
                    (10, 1, 10, 15),
                )],
                arg_tys: vec![],
                res_ty: Ty::bool(),
            },
        }),
        (10, 1, 10, 15),
    )
}

fn main_module() -> ModuleSnapshot {
    let mut main = module(
        "Main",
        Some(MAIN_FILE),
        vec![
            TyThing::Id {
                name: main_name("f"),
                ty: Ty::func(Ty::int(), Ty::int()),
                parent: None,
            },
            TyThing::Id {
                name: main_name("g"),
                ty: Ty::func(maybe(Ty::int()), Ty::int()),
                parent: None,
            },
            TyThing::Id {
                name: main_name("k"),
                ty: Ty::char(),
                parent: None,
            },
            TyThing::Id {
                name: main_name("e"),
                ty: Ty::bool(),
                parent: None,
            },
        ],
    );

    main.name_env = vec![
        INT_TYCON.clone(),
        CHAR_TYCON.clone(),
        BOOL_TYCON.clone(),
        TRUE_DATACON.clone(),
        FALSE_DATACON.clone(),
        LIST_TYCON.clone(),
        NIL_DATACON.clone(),
        CONS_DATACON.clone(),
        maybe_tycon(),
        just(),
        nothing(),
        num(),
        plus(),
        eq(),
        eq_op(),
        record_tycon("Person"),
        record_field("Person"),
        record_tycon("Pet"),
        record_field("Pet"),
        main_name("f"),
        main_name("g"),
        main_name("k"),
        main_name("e"),
    ]
    .into_iter()
    .collect();

    main.type_env.bind_evidence(
        Name::local("$dNumInt"),
        Pred::new(num(), vec![Ty::int()]),
    );
    main.binds = vec![dict_bind(), f_bind(), g_bind(), k_bind(), e_bind()];
    main
}

pub fn snapshot() -> Snapshot {
    let mut snapshot = Snapshot::new();
    for module in vec![
        ghc_types(),
        ghc_maybe(),
        ghc_num(),
        ghc_classes(),
        record("Person"),
        record("Pet"),
        main_module(),
    ] {
        snapshot.add_module(module);
    }
    snapshot
}

/// The snapshot with a diagnostic recorded against `module`.
#[allow(dead_code)]
pub fn snapshot_with_error(module: &str) -> Snapshot {
    let mut snapshot = snapshot();
    for m in snapshot.modules.iter_mut() {
        if m.module().as_str() == module {
            m.diagnostics
                .push(format!("{}: error: Variable not in scope: foo", module));
        }
    }
    snapshot
}
