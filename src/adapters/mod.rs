// Adapters layer: host implementations of the domain ports.

pub mod console;
pub mod headless;

pub use console::{ConsoleAlerts, LogContactChannel, RecordingAlerts};
pub use headless::HeadlessDocument;
