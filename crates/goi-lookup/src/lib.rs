pub mod english;
pub mod japanese;
pub mod orchestrator;
pub mod provider;

pub use english::EnglishProvider;
pub use japanese::JapaneseProvider;
pub use orchestrator::LookupOrchestrator;
pub use provider::{DefinitionProvider, LookupError};
