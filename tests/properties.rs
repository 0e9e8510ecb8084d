use bar_sat::{
    context::{Context, ContextState},
    db::{trail::Assignment, LevelIndex},
    procedures::{analysis::AnalysisResult, bcp::BCPResult, decision::DecisionOk},
    reports::Report,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A random formula of `clause_count` clauses, each on `width` distinct atoms from `atom_count` atoms.
fn random_formula(
    rng: &mut StdRng,
    atom_count: Atom,
    clause_count: usize,
    width: usize,
) -> Vec<CClause> {
    (0..clause_count)
        .map(|_| {
            let mut clause = CClause::default();
            while clause.len() < width {
                let atom = rng.random_range(0..atom_count);
                if clause.iter().all(|literal| literal.atom() != atom) {
                    clause.push(CLiteral::new(atom, rng.random_bool(0.5)));
                }
            }
            clause
        })
        .collect()
}

fn context_from(atom_count: Atom, formula: &[CClause]) -> Context {
    let mut ctx = Context::default();
    for atom in 0..atom_count {
        assert_eq!(ctx.atom_db.fresh_or_existing_atom(&format!("x{atom}")), Ok(atom));
    }
    for clause in formula {
        assert!(ctx.add_clause(clause.clone()).is_ok());
    }
    ctx
}

/// Whether some valuation of the atoms satisfies every clause of the formula.
fn brute_force(atom_count: Atom, formula: &[CClause]) -> bool {
    (0..(1_u32 << atom_count)).any(|bits| {
        let valuation = (0..atom_count)
            .map(|atom| Some((bits >> atom) & 1 == 1))
            .collect::<Vec<_>>();
        formula.iter().all(|clause| clause.satisfied_on(&valuation))
    })
}

fn assert_trail_consistent(ctx: &Context) {
    let mut seen = vec![false; ctx.atom_db.count()];
    let mut previous_level = 0;

    for assignment in ctx.trail.assignments() {
        let atom = assignment.literal.atom() as usize;
        assert!(!seen[atom], "{} is assigned twice", assignment.literal);
        seen[atom] = true;

        assert!(previous_level <= assignment.level);
        previous_level = assignment.level;

        assert_eq!(ctx.atom_db.literal_value(&assignment.literal), Some(true));
        assert_eq!(ctx.atom_db.level_of(assignment.literal.atom()), Some(assignment.level));
        assert_eq!(ctx.atom_db.antecedent_of(assignment.literal.atom()), assignment.antecedent);
        if assignment.level > 0 && assignment.antecedent.is_none() {
            assert_eq!(ctx.trail.decision_at(assignment.level), Some(assignment));
        }
    }

    assert_eq!(ctx.trail.level() as usize, previous_level as usize);
    assert_eq!(
        seen.iter().filter(|s| **s).count(),
        ctx.atom_db.valuation().iter().filter(|v| v.is_some()).count()
    );
}

fn assert_watches_hold(ctx: &Context) {
    let valuation = ctx.atom_db.valuation();
    for db_clause in ctx.clause_db.all_clauses() {
        let Some([a, b]) = db_clause.watched_literals() else {
            continue;
        };

        assert!(ctx.clause_db.watchers_of(&a).contains(&db_clause.key()));
        assert!(ctx.clause_db.watchers_of(&b).contains(&db_clause.key()));

        if !db_clause.satisfied_on(valuation) {
            assert_eq!(valuation.literal_value(&a), None, "{} in {}", a, db_clause.key());
            assert_eq!(valuation.literal_value(&b), None, "{} in {}", b, db_clause.key());
        }
    }
}

fn assert_backjump_correct(ctx: &Context, level: LevelIndex, removed: &[Assignment]) {
    assert!(ctx.trail.level() <= level);
    assert!(ctx.trail.assignments().iter().all(|a| a.level <= level));

    for assignment in removed {
        let atom = assignment.literal.atom();
        assert_eq!(ctx.atom_db.value_of(atom), None);
        assert_eq!(ctx.atom_db.level_of(atom), None);
        assert_eq!(ctx.atom_db.antecedent_of(atom), None);
    }
}

/// Solves by stepping through procedures, with checks on invariants after each step.
fn stepped_solve(ctx: &mut Context) -> Report {
    ctx.state = ContextState::Solving;

    if let BCPResult::Conflict(_) = ctx.queue_unit_clauses() {
        return Report::Unsatisfiable;
    }

    loop {
        let propagation = ctx.propagate();
        assert_trail_consistent(ctx);

        match propagation {
            BCPResult::NoConflict => {
                assert!(ctx.trail.queue_is_empty());
                assert_watches_hold(ctx);

                match ctx.make_decision() {
                    DecisionOk::Literal(literal) => {
                        assert_eq!(ctx.trail.decision_at(ctx.trail.level()).map(|a| a.literal), Some(literal));
                    }
                    DecisionOk::Exhausted => return Report::Satisfiable,
                }
            }

            BCPResult::Conflict(key) => {
                assert!(ctx.clause_db.get(&key).unwrap().unsatisfiable_on(ctx.atom_db.valuation()));

                match ctx.conflict_analysis(&key) {
                    AnalysisResult::Unsatisfiable => return Report::Unsatisfiable,

                    AnalysisResult::AssertingClause {
                        clause,
                        literal,
                        level,
                    } => {
                        assert!(level < ctx.trail.level());
                        assert_eq!(clause[0], literal);
                        assert!(clause.unsatisfiable_on(ctx.atom_db.valuation()));

                        let removed = ctx
                            .trail
                            .assignments()
                            .iter()
                            .filter(|a| a.level > level)
                            .copied()
                            .collect::<Vec<_>>();

                        ctx.backjump(level);
                        assert_backjump_correct(ctx, level, &removed);
                        assert_eq!(clause.asserts(ctx.atom_db.valuation()), Some(literal));

                        assert!(ctx.learn(clause, literal).is_ok());
                    }
                }
            }
        }
    }
}

mod soundness {
    use super::*;

    #[test]
    fn random_three_cnf() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let atom_count = rng.random_range(3..=12);
            let clause_count = rng.random_range(1..=(atom_count as usize * 5));
            let formula = random_formula(&mut rng, atom_count, clause_count, 3);

            let mut ctx = context_from(atom_count, &formula);
            let report = ctx.solve().unwrap();

            match report {
                Report::Satisfiable => {
                    let model = ctx
                        .model()
                        .into_iter()
                        .map(|(_, value)| Some(value))
                        .collect::<Vec<_>>();
                    assert!(formula.iter().all(|clause| clause.satisfied_on(&model)));
                }
                Report::Unsatisfiable => assert!(!brute_force(atom_count, &formula)),
                Report::Unknown => panic!("Unknown without a limit"),
            }
        }
    }

    #[test]
    fn random_mixed_width() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let atom_count = rng.random_range(2..=8);
            let width = rng.random_range(1..=2);
            let clause_count = rng.random_range(1..=(atom_count as usize * 3));
            let formula = random_formula(&mut rng, atom_count, clause_count, width);

            let mut ctx = context_from(atom_count, &formula);
            let expected = match brute_force(atom_count, &formula) {
                true => Report::Satisfiable,
                false => Report::Unsatisfiable,
            };
            assert_eq!(ctx.solve(), Ok(expected));
        }
    }
}

mod completeness {
    use super::*;

    #[test]
    fn agrees_with_brute_force() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..30 {
            let atom_count = rng.random_range(10..=14);
            // Around the threshold of 3-CNF, for a mix of verdicts.
            let clause_count = (atom_count as f64 * 4.26) as usize;
            let formula = random_formula(&mut rng, atom_count, clause_count, 3);

            let mut ctx = context_from(atom_count, &formula);
            let expected = match brute_force(atom_count, &formula) {
                true => Report::Satisfiable,
                false => Report::Unsatisfiable,
            };
            assert_eq!(ctx.solve(), Ok(expected));
        }
    }
}

mod invariants {
    use super::*;

    #[test]
    fn stepped_random_three_cnf() {
        let mut rng = StdRng::seed_from_u64(1024);

        for _ in 0..100 {
            let atom_count = rng.random_range(4..=14);
            let clause_count = (atom_count as f64 * rng.random_range(2.0..5.0)) as usize;
            let formula = random_formula(&mut rng, atom_count, clause_count, 3);

            let mut stepped = context_from(atom_count, &formula);
            let mut solved = context_from(atom_count, &formula);

            let report = stepped_solve(&mut stepped);
            assert_eq!(solved.solve(), Ok(report));
            assert_eq!(stepped.model(), solved.model());
        }
    }

    #[test]
    fn backjump_to_zero() {
        let mut ctx = context_from(4, &[]);
        let literals = (0..4).map(|atom| CLiteral::new(atom, true)).collect::<Vec<_>>();

        for literal in &literals {
            ctx.record_decision(*literal);
        }
        assert_eq!(ctx.trail.level(), 4);

        let removed = ctx.trail.assignments().to_vec();
        ctx.backjump(0);
        assert_backjump_correct(&ctx, 0, &removed);
        assert!(ctx.trail.assignments().is_empty());
        assert!(ctx.atom_db.valuation().unvalued_atoms().eq(0..4));
    }

    #[test]
    fn learnt_clauses_are_consequences() {
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..30 {
            let atom_count = rng.random_range(6..=10);
            let clause_count = atom_count as usize * 5;
            let formula = random_formula(&mut rng, atom_count, clause_count, 3);

            let mut ctx = context_from(atom_count, &formula);
            assert!(ctx.solve().is_ok());

            // Each valuation satisfying the formula satisfies every learnt clause.
            for bits in 0..(1_u32 << atom_count) {
                let valuation = (0..atom_count)
                    .map(|atom| Some((bits >> atom) & 1 == 1))
                    .collect::<Vec<_>>();
                if formula.iter().all(|clause| clause.satisfied_on(&valuation)) {
                    assert!(ctx
                        .clause_db
                        .addition_clauses()
                        .all(|learnt| learnt.satisfied_on(&valuation)));
                }
            }
        }
    }
}
