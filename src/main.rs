//! weatherkit - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use weatherkit::{
    cli::{Args, Commands},
    config::Config,
    formatting::{format_temperature_in, ReadingFormatter},
    logging,
    types::WeatherError,
    validation::validate_city_name,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.clone()).context("loading config")?;
    logging::init(&args.effective_logging(&config.logging));
    tracing::debug!(verbosity = args.verbosity().as_str(), "configuration loaded");

    let formatter = ReadingFormatter::new(config.display.clone());

    match args.command {
        Commands::Validate { names } => {
            let mut all_valid = true;
            for name in &names {
                match validate_city_name(name.as_str()) {
                    Ok(trimmed) => println!("{} {}", "✓".green(), trimmed),
                    Err(reason) => {
                        all_valid = false;
                        println!("{} {:?}: {}", "✗".red(), name, reason);
                    }
                }
            }
            if !all_valid {
                std::process::exit(1);
            }
        }
        Commands::Format { temperature, unit } => {
            let text = match unit {
                Some(unit) => format_temperature_in(temperature, unit),
                None => formatter.temperature(temperature),
            };
            println!("{}", text);
        }
        Commands::Log { message, error } => match error {
            Some(detail) => {
                let err = WeatherError::Unknown(detail);
                logging::log_error(message.as_str(), Some(&err));
            }
            None => logging::log_debug(message.as_str()),
        },
        Commands::Icon { code } => {
            println!("{}", formatter.icon(&code));
        }
        Commands::Config => {
            if let Some(path) = Config::default_path() {
                println!("{} {}", "# default location:".dimmed(), path.display());
            }
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
