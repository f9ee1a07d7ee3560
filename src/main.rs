// src/main.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use prodline::config;
use prodline::core::Session;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // ------------------------------------------------------------
    // Config
    // ------------------------------------------------------------
    let cfg_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".into());

    let cfg = match config::load(&cfg_path) {
        Ok(cfg) => {
            info!("[prodline] loaded {}", cfg_path);
            cfg
        }
        Err(err) => {
            warn!("[prodline] {} not usable ({}), using defaults", cfg_path, err);
            config::Config::default()
        }
    };

    // Boundary validation: capacity and interval never reach the core
    // unchecked. The error message is the user-facing rejection.
    let line_cfg = cfg.validate()?;

    // ------------------------------------------------------------
    // Graceful shutdown
    // ------------------------------------------------------------
    let running = Arc::new(AtomicBool::new(true));
    {
        let r = running.clone();
        ctrlc::set_handler(move || {
            info!("\n[prodline] shutdown requested");
            r.store(false, Ordering::SeqCst);
        })?;
    }

    // ------------------------------------------------------------
    // Session (one-shot start)
    // ------------------------------------------------------------
    let mut session = Session::new(&line_cfg);
    session.start()?;

    while running.load(Ordering::SeqCst) {
        std::thread::sleep(Duration::from_millis(200));
    }

    session.stop()?;

    let status = session.producer_status();
    info!(
        "[prodline] session ended, items_produced={} buffered={}",
        status.items_produced,
        session.buffer().len()
    );

    Ok(())
}
