//! Tracing setup shared by Slow Computer apps.
//!
//! Logs go to a daily rolling file under the app's data directory. The
//! returned guard flushes the background writer when dropped, so `main`
//! must hold it until the event loop exits.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::storage::data_dir;

pub struct LoggingGuard {
    _guard: WorkerGuard,
    pub log_dir: PathBuf,
}

fn ensure_log_dir(app_name: &str) -> std::io::Result<PathBuf> {
    let dir = data_dir(app_name).join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default filter directive: the app crate and padcore at `info`.
fn default_directive(app_name: &str) -> String {
    format!("{app_name}=info,padcore=info")
}

pub fn init(app_name: &str) -> Option<LoggingGuard> {
    let log_dir = ensure_log_dir(app_name)
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir().join(app_name).join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, format!("{app_name}.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(app_name)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}
