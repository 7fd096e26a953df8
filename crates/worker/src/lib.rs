//! Background worker process.
//!
//! For now the worker only proves liveness: it emits a heartbeat log line
//! carrying the shared settings it was started with.

use std::time::Duration;

use beardai_core::settings::{parse_var, Settings, SettingsError};
use tokio_util::sync::CancellationToken;

/// Default heartbeat interval in seconds.
pub const DEFAULT_HEARTBEAT_INTERVAL_SECS: u64 = 30;

/// Read `HEARTBEAT_INTERVAL_SECS` (default: `30`). Zero is rejected.
pub fn heartbeat_interval_from_env() -> Result<Duration, SettingsError> {
    let secs: u64 = parse_var(
        "HEARTBEAT_INTERVAL_SECS",
        std::env::var("HEARTBEAT_INTERVAL_SECS").ok(),
        DEFAULT_HEARTBEAT_INTERVAL_SECS,
    )?;
    if secs == 0 {
        return Err(SettingsError::Invalid {
            name: "HEARTBEAT_INTERVAL_SECS",
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

/// Human-readable heartbeat line.
pub fn heartbeat_message(settings: &Settings) -> String {
    format!(
        "worker alive (env={} redis={})",
        settings.env, settings.redis_url
    )
}

/// Emit a heartbeat every `interval` until `cancel` fires.
///
/// The first beat is emitted immediately. Returns the number of beats.
pub async fn run_heartbeat(
    settings: &Settings,
    interval: Duration,
    cancel: CancellationToken,
) -> u64 {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let mut beats = 0u64;

    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                tracing::info!(beats, "Heartbeat stopped");
                return beats;
            }
            _ = ticker.tick() => {
                beats += 1;
                tracing::info!(
                    env = %settings.env,
                    redis_url = %settings.redis_url,
                    "{}",
                    heartbeat_message(settings),
                );
            }
        }
    }
}
