pub mod settings;

pub use settings::{AppConfig, ApiSettings, LayoutSettings, QueryOptions};
