use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "cirrus")]
#[command(about = "Cirrus - local weather console with a client-side session gate", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and open a session
    Login {
        /// Email or username (prompted when omitted)
        #[arg(long)]
        user: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Close the current session
    Logout,
    /// Show the current session
    Whoami,
    /// Look up the current weather for a city
    Search {
        /// City name
        #[arg(required = true)]
        city: Vec<String>,
    },
    /// Inspect the local audit trail
    Audit {
        #[command(subcommand)]
        action: AuditCommand,
    },
    /// Show the configuration summary (admin role required)
    Admin,
}

#[derive(Subcommand)]
enum AuditCommand {
    /// Print all entries in insertion order
    Show,
    /// Remove all entries
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = commands::build_context()?;

    let outcome = match cli.command {
        Commands::Login { user, password } => commands::login::run(&ctx, user, password),
        Commands::Logout => commands::logout::run(&ctx),
        Commands::Whoami => commands::whoami::run(&ctx),
        Commands::Search { city } => commands::search::run(&ctx, &city.join(" ")).await,
        Commands::Audit { action } => match action {
            AuditCommand::Show => commands::audit::show(&ctx),
            AuditCommand::Clear => commands::audit::clear(&ctx),
        },
        Commands::Admin => commands::admin::run(&ctx),
    };

    // Domain failures are user-facing messages, not stack traces.
    if let Err(err) = outcome {
        eprintln!("{}", err.to_string().red());
        std::process::exit(1);
    }

    Ok(())
}
