pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod table;

pub use config::Config;
pub use error::{FetchError, ScrapeError};
pub use pipeline::{run, Outcome};
pub use record::GiEntry;
