pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SiteConfig;

pub use adapters::{ConsoleAlerts, HeadlessDocument, LogContactChannel, RecordingAlerts};
pub use crate::core::content::ContentStore;
pub use crate::core::view_model::{PortfolioViewModel, ViewSettings};
pub use utils::error::{PortfolioError, Result};
