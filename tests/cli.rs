use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_bar_sat"))
        .args(args)
        .output()
        .expect("failed to run binary")
}

fn fixture(name: &str) -> String {
    format!("{}/tests/formulas/{name}", env!("CARGO_MANIFEST_DIR"))
}

mod cli {
    use super::*;

    #[test]
    fn satisfiable() {
        let output = run(&[&fixture("sat/unit_chain.txt")]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert_eq!(output.status.code(), Some(0));
        assert!(stdout.starts_with("Given clauses:\nClause 1: x1\nClause 2: x1bar + x2\n"));
        assert!(stdout.contains("Satisfying assignment:\nx1: true\nx2: true\nx3: true\n"));
    }

    #[test]
    fn unsatisfiable() {
        let output = run(&[&fixture("unsat/four_binary.txt")]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert_eq!(output.status.code(), Some(1));
        assert!(stdout.contains("Clause 4: x1bar + x2\n"));
        assert!(stdout.ends_with("Formula is unsatisfiable.\n"));
    }

    #[test]
    fn unknown() {
        let output = run(&["--conflict-limit", "0", &fixture("unsat/four_binary.txt")]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert_eq!(output.status.code(), Some(3));
        assert!(stdout.ends_with("Satisfiability unknown.\n"));
    }

    #[test]
    fn stats() {
        let output = run(&["--stats", &fixture("sat/wide_clause.txt")]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert_eq!(output.status.code(), Some(0));
        assert!(stdout.contains("Decisions:    1\n"));
    }

    #[test]
    fn missing_argument() {
        let output = run(&[]);

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(!output.stderr.is_empty());
    }

    #[test]
    fn missing_file() {
        let output = run(&[&fixture("sat/no_such_formula.txt")]);

        assert_eq!(output.status.code(), Some(2));
        assert!(!output.stderr.is_empty());
    }

    #[test]
    fn malformed_file() {
        let path = std::env::temp_dir().join(format!("bar_sat_malformed_{}.txt", std::process::id()));
        std::fs::write(&path, "x1 + \n").unwrap();

        let output = run(&[path.to_str().unwrap()]);
        let _ = std::fs::remove_file(&path);

        assert_eq!(output.status.code(), Some(2));
        assert!(String::from_utf8_lossy(&output.stderr).contains("line 1"));
    }
}
