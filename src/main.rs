use clap::{Parser, Subcommand};
use std::sync::Arc;

use galebot::application::context::AppContext;
use galebot::application::errors::{BotError, ConfigError};
use galebot::application::messaging::MessageDispatcher;
use galebot::infrastructure::adapters::console::{run_console_bot, ConsoleAdapter};
use galebot::infrastructure::adapters::discord::{run_discord_bot, DiscordAdapter};
use galebot::infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "galebot")]
#[command(about = "A Discord bot that talks back with what it has heard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Discord bot token (overrides config and DISCORD_TOKEN)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            if let Err(e) = run_bot(&cli.config, cli.token) {
                tracing::error!("galebot stopped: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("galebot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            if let Err(e) = init_config() {
                eprintln!("Failed to render config: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn load_config(config_path: &str, token_override: Option<String>) -> Config {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env loaded: {}", e);
    }

    let config = if std::path::Path::new(config_path).exists() {
        match Config::load(config_path) {
            Ok(config) => config.with_env_overrides(),
            Err(e) => {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::load_env()
            }
        }
    } else {
        Config::load_env()
    };

    let mut config = config;
    if let Some(token) = token_override {
        config.set_token(token);
    }
    config
}

fn run_bot(config_path: &str, token_override: Option<String>) -> Result<(), BotError> {
    let config = load_config(config_path, token_override);
    config.validate()?;

    tracing::info!("Starting galebot: {}", config.bot.name);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| BotError::Internal(format!("Failed to start runtime: {}", e)))?;

    let token = config.discord_token().map(str::to_string);
    match token {
        Some(token) => rt.block_on(async move {
            let bot = DiscordAdapter::connect(&token).await?;
            let ctx = AppContext::new(Arc::new(bot), config);
            let dispatcher = Arc::new(MessageDispatcher::new(&ctx));
            run_discord_bot(&token, dispatcher).await
        }),
        None if !config.console_enabled() => Err(ConfigError::MissingField(
            "adapters.discord.token (console adapter is disabled)".to_string(),
        )
        .into()),
        None => rt.block_on(async move {
            // Run console bot (dev mode)
            tracing::info!("No Discord token configured, using console");
            let bot = ConsoleAdapter::new(config.bot.name.clone());
            let ctx = AppContext::new(Arc::new(bot), config);
            let dispatcher = MessageDispatcher::new(&ctx);
            run_console_bot(&dispatcher).await
        }),
    }
}

fn init_config() -> Result<(), serde_yaml::Error> {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config)?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
