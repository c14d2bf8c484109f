//! Service layer: persona lookup, prompt construction, fallback generation and
//! the orchestration that ties them to a completion client.

pub mod connectivity;
pub mod context_window;
pub mod fallback;
pub mod orchestrator;
pub mod persona_registry;
pub mod prompt_assembler;
pub mod session;

pub use connectivity::ConnectivityMonitor;
pub use orchestrator::{Orchestrator, OrchestratorSettings};
pub use session::{ChatSession, SubmitOutcome};
