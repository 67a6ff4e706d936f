use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::{bail, Context};
use log::{info, warn};
use xerxes_api::{create_app, AppState};
use xerxes_infra::cache::CacheStore;
use xerxes_infra::sms::{create_sms_service, SmsServiceAdapter};
use xerxes_shared::config::load_dotenv;
use xerxes_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // .env may set RUST_LOG; the logger must be up before config parsing warns
    load_dotenv();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();

    info!("Starting Xerxes API Server ({})", config.environment);

    if config.auth.is_using_default_secret() {
        if config.environment.is_development() {
            warn!("JWT_SECRET is not set; using the development secret");
        } else {
            bail!("JWT_SECRET must be set outside development");
        }
    }

    let store = CacheStore::from_config(&config.cache)
        .await
        .context("failed to initialize the key-value store")?;
    info!("Using {} store", store.kind());
    match store.health_check().await {
        Ok(true) => {}
        Ok(false) => warn!("{} store health check failed", store.kind()),
        Err(e) => warn!("{} store health check errored: {}", store.kind(), e),
    }

    let sms_provider = create_sms_service(&config.sms)
        .await
        .context("failed to initialize the SMS provider")?;
    let sms_service = SmsServiceAdapter::new(sms_provider);
    info!("Using {} SMS provider", sms_service.provider_name());
    if !sms_service.is_available().await {
        warn!(
            "{} SMS provider is not reachable; verification codes may not be delivered",
            sms_service.provider_name()
        );
    }

    let app_state = web::Data::new(AppState::new(
        Arc::new(store),
        Arc::new(sms_service),
        &config.auth,
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let environment = config.environment;
    let mut server = HttpServer::new(move || create_app(app_state.clone(), environment));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped");
    Ok(())
}
