pub mod cleaner;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod logging;
pub mod record;
pub mod report;
pub mod sort;

pub use error::{AutoMpgError, Result};
pub use loader::AutoMpgData;
pub use record::AutoMpg;
pub use sort::SortOrder;
