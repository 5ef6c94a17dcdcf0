use clap::Parser;
use soil_suitability::config::Command;
use soil_suitability::domain::ports::ConfigProvider;
use soil_suitability::utils::logger;
use soil_suitability::{CliConfig, HttpTransport, SoilError, SoilService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(cli.verbose, settings.log_level());
    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Using SoilGrids endpoint: {}", settings.api_endpoint());

    let service = SoilService::new(HttpTransport::new(&settings));
    let coords = cli.coordinates();

    let output = match &cli.command {
        Command::Info(_) => service
            .soil_info(coords.lat, coords.lon)
            .await
            .and_then(|props| to_json(&props)),
        Command::Suitability(_) => service
            .soil_suitability(coords.lat, coords.lon)
            .await
            .and_then(|verdict| to_json(&verdict)),
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> soil_suitability::Result<String> {
    serde_json::to_string_pretty(value).map_err(SoilError::processing)
}
