mod manager;
mod validate;

pub use manager::{ConfigContentProvider, ConfigManager, FileContentConfigProvider};
pub use validate::Validate;
