pub mod config;
pub mod error;
pub mod types;
pub mod validation;

pub use error::{CheckError, Result};
