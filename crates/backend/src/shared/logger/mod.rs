use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LoggingConfig;

/// Установить глобальный subscriber для tracing
///
/// `RUST_LOG` важнее фильтра из конфигурации. Если задан `file`, события
/// дописываются и в этот файл без ANSI цветов. Ошибка, если глобальный
/// subscriber уже установлен
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = build_filter(config)?;

    let file_layer = match &config.file {
        Some(path) => {
            let path = std::path::Path::new(path);
            // Создаем директорию для логов
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Arc::new(log_file))
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing init failed: {e}"))
}

fn build_filter(config: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.trim().is_empty() => Ok(EnvFilter::new(directives)),
        _ => EnvFilter::try_new(&config.filter)
            .map_err(|e| anyhow::anyhow!("invalid log filter '{}': {e}", config.filter)),
    }
}
