pub mod config;
pub mod logging;

pub mod canonical;
pub mod convention;
pub mod error;
pub mod pathclean;
pub mod percent;
pub mod probe;
pub mod registry;
pub mod scrub;
pub mod validate;

pub use canonical::{downloadable_url, downloadable_url_with};
pub use error::SourceError;
pub use probe::{file_exists_locally, file_exists_locally_with};
pub use registry::SchemeRegistry;
pub use validate::{validated_url, validated_url_with};
