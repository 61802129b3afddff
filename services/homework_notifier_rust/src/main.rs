use anyhow::Result;
use dotenv::dotenv;
use homework_notifier_rust::{config, logging, Config, Poller};
use homework_rust_core::clients::{PracticumClient, TelegramClient};
use log::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    logging::init(&config::log_file_from_env())?;

    info!("Starting Homework Notifier...");

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{:#}", e);
            return Err(e);
        }
    };
    info!(
        "Config: endpoint={} retry_period={}s lookback={}s on_failed_send={:?}",
        cfg.practicum_endpoint,
        cfg.retry_period.as_secs(),
        cfg.lookback_secs,
        cfg.notify_failure_policy,
    );

    let source = PracticumClient::new(cfg.practicum_endpoint.clone(), cfg.practicum_token.clone());
    let sink = TelegramClient::new(
        cfg.telegram_api_base_url.clone(),
        cfg.telegram_token.clone(),
        cfg.telegram_chat_id.clone(),
    );

    let mut poller = Poller::from_config(&cfg, source, sink);
    poller.run().await;

    Ok(())
}
