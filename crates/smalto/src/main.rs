mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "smalto",
    version,
    about = "A window styling daemon for Windows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration files
    Init,
    /// Start the styling daemon
    Start,
    /// Stop the styling daemon
    Stop,
    /// Show whether the daemon is running
    Status,
    /// Re-apply rules to all windows now
    Sweep,
    /// Reload the rule set from disk
    Reload,
    /// List visible windows and the rule that governs each
    List,
    /// Manage automatic startup on logon
    Autostart {
        #[command(subcommand)]
        command: AutostartCommands,
    },
    /// Run the daemon (internal — not for direct use)
    #[command(hide = true)]
    Daemon,
}

#[derive(Subcommand)]
enum AutostartCommands {
    /// Register smalto to start on logon
    Enable,
    /// Remove the logon registration
    Disable,
    /// Show whether autostart is registered
    Status,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Start => commands::start::execute(),
        Commands::Stop => commands::stop::execute(),
        Commands::Status => commands::status::execute(),
        Commands::Sweep => commands::sweep::execute(),
        Commands::Reload => commands::reload::execute(),
        Commands::List => commands::list::execute(),
        Commands::Daemon => commands::daemon::execute(),
        Commands::Autostart { command } => match command {
            AutostartCommands::Enable => commands::autostart::enable(),
            AutostartCommands::Disable => commands::autostart::disable(),
            AutostartCommands::Status => commands::autostart::status(),
        },
    }
}
