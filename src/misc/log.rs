/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These trace the decisions, consequences, conflicts, and learned clauses of a solve.

Note, no log implementation is provided by the library.
The binary uses [env_logger](https://docs.rs/env_logger/latest/env_logger/), and so output may be narrowed to a target with, e.g. `RUST_LOG=trail=info`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs of the [trail](crate::db::trail)
    pub const TRAIL: &str = "trail";

    /// Logs related to the [solve loop](crate::procedures::solve)
    pub const SOLVE: &str = "solve";
}
