pub mod agent;
pub mod completion;
pub mod config;
pub mod connectivity;
pub mod conversation;

pub use agent::{AgentId, PersonaDescriptor};
pub use completion::{CompletionRequest, CompletionResult};
pub use config::{ChatConfig, Config, LoggingConfig, RemoteConfig};
pub use connectivity::{ConnectivityStatus, ModelDescriptor};
pub use conversation::{ConversationTurn, Provenance, Role};
