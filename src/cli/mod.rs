//! Command-line interface.

pub mod commands;
pub mod context;
pub mod output;
pub mod types;

pub use context::AppContext;
pub use types::{Cli, Commands};

/// Print `err` to stderr, as JSON when requested, and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let chain: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
        eprintln!(
            "{}",
            serde_json::json!({ "error": err.to_string(), "caused_by": chain })
        );
    } else {
        eprintln!("{} {err:#}", console::style("Error:").red().bold());
    }
    std::process::exit(1);
}

/// Run the parsed command against an already built context.
pub async fn dispatch(command: Commands, ctx: &AppContext, json_mode: bool) -> anyhow::Result<()> {
    match command {
        Commands::Agents => commands::agents::execute(json_mode),
        Commands::Ask(args) => commands::ask::execute(args, ctx, json_mode).await,
        Commands::Chat(args) => commands::chat::execute(args, ctx, json_mode).await,
        Commands::Status => commands::status::execute(ctx, json_mode).await,
    }
}
