use anyhow::Result;
use clap::{Parser, Subcommand};
use marquee_infrastructure::ConfigService;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Marquee CLI - profile-aware navigation for the streaming browser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the profiles of a user and print the navbar they produce
    Accounts {
        /// Signed-in user id
        #[arg(long)]
        user_id: String,
        /// Profile to make active after loading
        #[arg(long)]
        account: Option<String>,
        /// Follow a menu entry afterwards (home, tv, movies, my-list)
        #[arg(long)]
        open: Option<String>,
        /// Print the render model as JSON
        #[arg(long)]
        json: bool,
    },
    /// Try the database connection from MONGODB_URI / config
    DbCheck,
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration (file + environment)
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = ConfigService::new()?;
    let config = config_service.get_config();
    logging::init(&config.logging.level);

    match cli.command {
        Commands::Accounts {
            user_id,
            account,
            open,
            json,
        } => commands::accounts::run(&config, user_id, account, open, json).await?,
        Commands::DbCheck => commands::database::check(&config).await,
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path(&config_service),
            ConfigAction::Show => commands::config::show(&config)?,
        },
    }

    Ok(())
}
