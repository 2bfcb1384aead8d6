pub mod command;
pub mod error;
pub mod result;
pub mod engine;

pub use command::Command;
pub use error::QueryError;
pub use result::QueryResult;
pub use engine::QueryEngine;
