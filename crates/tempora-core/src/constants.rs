/// Tempora system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default chunk size ceiling (characters).
pub const DEFAULT_MAX_CHARS: usize = 1200;

/// Default minimum sentence length retained as an atomic fact (characters).
pub const DEFAULT_MIN_FACT_LEN: usize = 10;

/// Default synthetic timestamp range (inclusive).
pub const DEFAULT_T_MIN: i64 = 0;
pub const DEFAULT_T_MAX: i64 = 10;

/// Default exponential decay rate.
pub const DEFAULT_LAMBDA: f64 = 0.3;

/// Default number of results returned by ranking and graph top-k.
pub const DEFAULT_TOP_K: usize = 5;

/// Default propagation mixing factor (own score vs neighbor average).
pub const DEFAULT_ALPHA: f64 = 0.7;

/// Default diffusion depth (propagation rounds per query).
pub const DEFAULT_ROUNDS: usize = 1;

/// Default convergence epsilon for `propagate_until`.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Minimum token length kept by the lexical tokenizer.
pub const MIN_TOKEN_LEN: usize = 3;
