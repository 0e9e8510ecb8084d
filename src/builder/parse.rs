use crate::{
    builder::{LITERAL_SEPARATOR, NEGATION_MARKER},
    context::Context,
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

use std::io::BufRead;

/// Information about a formula read into a context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// A count of clauses added.
    pub clauses: usize,

    /// A count of fresh atoms.
    pub atoms: usize,
}

impl Context {
    /// Reads a formula into the context, with each line of the reader a clause.
    ///
    /// ```rust,ignore
    /// context.read_formula(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use bar_sat::context::Context;
    /// # use bar_sat::reports::Report;
    /// # use std::io::Write;
    /// let mut the_context = Context::default();
    ///
    /// let mut formula = vec![];
    /// let _ = formula.write(b"x1 + x2\nx1bar + x2bar\nx1 + x2bar\nx1bar + x2\n");
    ///
    /// let info = the_context.read_formula(formula.as_slice()).unwrap();
    /// assert_eq!(info.clauses, 4);
    /// assert_eq!(info.atoms, 2);
    /// assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn read_formula(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let atoms_before = self.atom_db.count();

        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;
        let mut clause_counter = 0;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter + 1))),
            }

            let clause = self.parse_clause(&buffer, line_counter)?;
            self.add_clause(clause)?;
            clause_counter += 1;
        }

        log::info!(target: targets::CLAUSE_DB, "Atoms <name,atom>: {}", self.atom_db.index_string());

        Ok(ParserInfo {
            clauses: clause_counter,
            atoms: self.atom_db.count() - atoms_before,
        })
    }

    /// A clause from a string, introducing an atom for each fresh name.
    ///
    /// The clause is not added to the context.
    ///
    /// ```rust
    /// # use bar_sat::context::Context;
    /// # use bar_sat::structures::literal::{CLiteral, Literal};
    /// let mut the_context = Context::default();
    ///
    /// let clause = the_context.clause_from_string("x1 + x3bar").unwrap();
    /// assert_eq!(clause, vec![CLiteral::new(0, true), CLiteral::new(1, false)]);
    /// ```
    pub fn clause_from_string(&mut self, string: &str) -> Result<CClause, ErrorKind> {
        self.parse_clause(string, 1)
    }

    /// A clause from line `line` of some input.
    fn parse_clause(&mut self, line: &str, line_number: usize) -> Result<CClause, ErrorKind> {
        let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        if stripped.is_empty() {
            return Err(ErrorKind::from(err::ParseError::EmptyClause(line_number)));
        }

        let mut clause = CClause::default();
        for token in stripped.split(LITERAL_SEPARATOR) {
            if token.is_empty() {
                return Err(ErrorKind::from(err::ParseError::EmptyLiteral(line_number)));
            }

            let (name, polarity) = match token.strip_suffix(NEGATION_MARKER) {
                Some("") => return Err(ErrorKind::from(err::ParseError::Negation(line_number))),
                Some(name) => (name, false),
                None => (token, true),
            };

            let atom = self.atom_db.fresh_or_existing_atom(name)?;
            let literal = CLiteral::new(atom, polarity);
            if clause.contains(&literal) {
                return Err(ErrorKind::from(err::ParseError::DuplicateLiteral(line_number)));
            }
            clause.push(literal);
        }

        Ok(clause)
    }
}
