pub mod config;
pub mod error;
pub mod export;
pub mod nsq;
pub mod report;

pub use error::{EntityKind, NsqError, SchemaError};
