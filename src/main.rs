use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use coltrans::config::Config;
use coltrans::error::TrResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Columnar transposition encoder, decoder and key search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with search settings; explicit flags take precedence.
    #[arg(global = true, long)]
    config: Option<String>,

    /// Print machine-readable JSON instead of tables.
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Encode(cmd::encode::EncodeArgs),
    Decode(cmd::decode::DecodeArgs),
    Crack(cmd::crack::CrackArgs),
    Stats(cmd::stats::StatsArgs),
}

fn resolve_config(
    path: Option<&str>,
    cli_config: &Config,
    sub_matches: Option<&ArgMatches>,
) -> TrResult<Config> {
    let Some(path) = path else {
        return Ok(cli_config.clone());
    };

    info!("📂 Loading config: {}", path);
    let mut config = Config::load_from_file(path)?;
    if let Some(matches) = sub_matches {
        config.search.merge_from_cli(&cli_config.search, matches);
    }
    Ok(config)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Encode(args) => cmd::encode::run(args, cli.json),
        Commands::Decode(args) => cmd::decode::run(args, cli.json),
        Commands::Crack(args) => resolve_config(
            cli.config.as_deref(),
            &args.config,
            matches.subcommand_matches("crack"),
        )
        .and_then(|config| cmd::crack::run(args, config, cli.json)),
        Commands::Stats(args) => cmd::stats::run(args, cli.json),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
