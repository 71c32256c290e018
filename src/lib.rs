pub use error::AppError;

/// Main architecture layers (dependency flow: Core → Api → Storage)
pub mod core; // Business logic (per-resource services, session)
pub mod storage; // Client profile persistence

/// Support modules (used across layers)
pub mod api; // HTTP transport, response normalizer, error classifier
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
