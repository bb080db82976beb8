pub mod bridge;
pub mod config;
pub mod report;
pub mod session;

pub use config::GenerationConfig;
pub use session::{CaseRecord, GenerationSession, SessionError};
