pub mod annotate;
pub mod bed;
pub mod config;
pub mod error;
pub mod index;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use index::{BedIndex, DEFAULT_DENSE_LIMIT, IndexStats};
pub use types::{Interval, Strategy};
