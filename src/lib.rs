//! A library for determining the satisfiability of boolean formulas written in clausal form, with `+` for disjunction and `bar` for negation.
//!
//! bar_sat determines satisfiability by conflict-driven clause learning: repeated unit propagation over watched literals, deterministic decisions, first unique implication point conflict analysis, clause learning, and non-chronological backjumping.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config).
//! Clauses may be added through a [formula](crate::context::Context::read_formula) or [programatically](crate::context::Context::add_clause).
//!
//! Internally, and at a high-level, a solve is viewed in terms of manipulation of, and relationships between, a handful of databases:
//! - A formula is stored in a [clause database](crate::db::clause).
//! - A valuation, together with the names of atoms, is stored in an [atom database](crate::db::atom).
//! - The assignments which make up the valuation are stored, in order, on a [trail](crate::db::trail).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [structures] to familiarise yourself with the abstract elements of a solve and their representation (literals, clauses, etc.)
//!
//! # Examples
//!
//! + Parse and solve a formula.
//!
//! ```rust
//! # use bar_sat::context::Context;
//! # use bar_sat::reports::Report;
//! # use std::io::Write;
//! let mut the_context = Context::default();
//!
//! let mut formula = vec![];
//! let _ = formula.write(b"x1 + x3bar + x8bar\nx1bar\nx3\nx8\n");
//!
//! assert!(the_context.read_formula(formula.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! + Inspect a satisfying assignment.
//!
//! ```rust
//! # use bar_sat::context::Context;
//! # use bar_sat::reports::Report;
//! let mut the_context = Context::default();
//!
//! for string in ["x1", "x1bar + x2"] {
//!     let clause = the_context.clause_from_string(string).unwrap();
//!     assert!(the_context.add_clause(clause).is_ok());
//! }
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.model(), vec![("x1", true), ("x2", true)]);
//! assert_eq!(the_context.trail_string(), "<x1,0> <x2,0>");
//! ```
//!
//! # Logs
//!
//! Logs are made through the [log] facade, with targets listed in [misc::log::targets].
//! No log implementation is provided by the library.

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod resolution_buffer;
pub mod structures;
pub mod types;
