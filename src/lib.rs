pub mod config;
pub mod core;
pub mod error;
pub mod plot;

pub use error::{FinderError, Result};
