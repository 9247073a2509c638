use env_logger::Env;
use log::info;
use popular_movies::{api, service_from_config, AppConfig};

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;
    let service = service_from_config(&config)?;
    info!(
        "Serving movies from {} on {}:{}",
        config.storage_path, config.address, config.port
    );

    let _rocket = api::rocket_with_config(&config, service).launch().await?;
    Ok(())
}
