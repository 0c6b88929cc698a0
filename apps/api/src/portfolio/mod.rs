//! Prompt-to-portfolio engine: classifier, content library, synthesizers and
//! the AI assistant that edits an existing record.

pub mod assistant;
pub mod classifier;
pub mod handlers;
pub mod library;
pub mod prompts;
pub mod remote;
pub mod synthesizer;

pub use assistant::AiAssistant;
pub use remote::RemoteSynthesizer;
pub use synthesizer::{MockSynthesizer, PortfolioSynthesizer, StageTiming};
