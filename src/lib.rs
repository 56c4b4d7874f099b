// Research Presence - per-researcher literature and web-visibility counts

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod names;
pub mod plot;
pub mod report;
pub mod search;    // Search APIs (NASA ADS and Google Programmable Search)

// Re-exports for convenience
pub use aggregate::{collect_presence, ResultRecord};
pub use cli::Cli;
pub use config::Settings;
pub use names::load_names;
pub use plot::render_scatter;
pub use report::{read_csv, write_csv};
pub use search::{AdsClient, AdsFilters, GoogleClient, SearchError};
