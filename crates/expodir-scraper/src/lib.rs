pub mod client;
pub mod error;
pub mod harvest;
pub mod normalize;
pub mod rate_limit;
pub mod types;

pub use client::ExpoClient;
pub use error::ScraperError;
pub use harvest::{default_letters, harvest, ExhibitorSource, HarvestReport};
pub use normalize::{flatten_exhibitor, profile_text};
pub use types::{ExhibitorRow, ExhibitorSummary, OUTPUT_HEADER};
