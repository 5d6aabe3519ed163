/// Where the raw data set is published
pub const DATA_URL: &str =
    "https://archive.ics.uci.edu/ml/machine-learning-databases/auto-mpg/auto-mpg.data";

// File names, relative to the configured data directory
pub const RAW_FILE: &str = "auto-mpg.data.txt";
pub const CLEAN_FILE: &str = "auto-mpg.clean.txt";

pub const LOG_FILE: &str = "autompg.log";
pub const CONFIG_FILE: &str = "autompg.toml";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_CONSOLE_LEVEL: &str = "info";

/// Number of whitespace-separated groups in a cleaned row before the name tokens
pub const NAME_FIELD_INDEX: usize = 8;

/// Two-digit model years are offsets from this year
pub const CENTURY_BASE: i32 = 1900;
