/*!
Configuration of a context.

All configuration for a context is contained within [Config], which is fixed when the context is created.

The default configuration places no limit on a solve.

```rust
# use bar_sat::config::Config;
# use std::time::Duration;
let config = Config {
    time_limit: Some(Duration::from_secs(10)),
    ..Config::default()
};
assert!(config.conflict_limit.is_none());
```
*/

/// The primary configuration structure.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// The time limit for a solve, if any.
    ///
    /// On reaching the limit the solve stops with an [unknown](crate::reports::Report::Unknown) report.
    pub time_limit: Option<std::time::Duration>,

    /// The number of conflicts permitted during a solve, if limited.
    ///
    /// On exceeding the limit the solve stops with an [unknown](crate::reports::Report::Unknown) report.
    pub conflict_limit: Option<usize>,
}
