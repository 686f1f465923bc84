// Single source of truth for all default values.

// --- Sentiment ---
pub const DEFAULT_DEGENERATE_WORD_THRESHOLD: usize = 10;

// --- Mood shift ---
pub const DEFAULT_SHIFT_THRESHOLD: f64 = 1.5;
pub const DEFAULT_SHIFT_WINDOW: usize = 5;

// --- Analytics ---
pub const DEFAULT_TREND_WINDOW: usize = 14;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

// --- Files / env ---
pub const DEFAULT_CONFIG_FILENAME: &str = "eterna.toml";
pub const ENV_PREFIX: &str = "ETERNA_";
