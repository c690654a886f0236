use std::time::Duration;

pub const DEFAULT_MAX_ATTEMPTS: usize = 30;
pub const DEFAULT_MAX_EXPANSIONS: usize = 8_000;
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_millis(120);

/// Salt used for the first level of a freshly generated board
pub const INITIAL_SALT: &str = "init";
