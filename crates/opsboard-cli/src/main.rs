use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "opsboard-cli", version, about = "Opsboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Timeline layout computation
    Layout {
        #[command(subcommand)]
        action: commands::layout::LayoutAction,
    },
    /// KPI scoring
    Score {
        #[command(subcommand)]
        action: commands::score::ScoreAction,
    },
    /// Role weight tables
    Roles {
        #[command(subcommand)]
        action: commands::roles::RolesAction,
    },
    /// Generate shell completions
    Completions { shell: clap_complete::Shell },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Layout { action } => commands::layout::run(action),
        Commands::Score { action } => commands::score::run(action),
        Commands::Roles { action } => commands::roles::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "opsboard-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
