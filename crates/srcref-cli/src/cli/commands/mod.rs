//! CLI command handlers, one per file.

mod canonicalize;
mod config;
mod exists;
mod schemes;
mod scrub;
mod validate;

pub use canonicalize::run_canonicalize;
pub use config::run_config;
pub use exists::run_exists;
pub use schemes::run_schemes;
pub use scrub::run_scrub;
pub use validate::run_validate;
