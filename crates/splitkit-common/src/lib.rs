pub mod errors;
pub mod types;

pub use errors::EngineError;
pub use types::Unit;

pub type Result<T> = std::result::Result<T, EngineError>;
