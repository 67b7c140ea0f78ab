use std::sync::Once;

use env_logger::WriteStyle;
use log::LevelFilter;

/// How the global logger is set up.
///
/// Filter precedence: [`env_filter`](Self::env_filter), then `RUST_LOG`,
/// then [`default_level`](Self::default_level). Filters use the `env_logger`
/// syntax, e.g. `"quire_ui=debug,quire_engine=warn"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: WriteStyle,
    /// Prefix records with the emitting module (`quire_ui::dad`).
    pub module_path: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: WriteStyle::Auto,
            module_path: true,
        }
    }
}

impl LoggingConfig {
    pub fn filter(mut self, spec: impl Into<String>) -> Self {
        self.env_filter = Some(spec.into());
        self
    }

    pub fn level(mut self, level: LevelFilter) -> Self {
        self.default_level = level;
        self
    }

    pub fn write_style(mut self, style: WriteStyle) -> Self {
        self.write_style = style;
        self
    }

    fn resolved_filter(&self) -> Option<String> {
        self.env_filter.clone().or_else(|| std::env::var("RUST_LOG").ok())
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend.
///
/// Only the first call in a process does anything. A logger installed by
/// someone else (a test harness, the host) is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.resolved_filter() {
            Some(spec) => builder.parse_filters(&spec),
            None => builder.filter_level(config.default_level),
        };
        builder.write_style(config.write_style).format_module_path(config.module_path);

        match builder.try_init() {
            Ok(()) => log::debug!("logging initialized"),
            Err(_) => log::debug!("logger already installed; keeping it"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let cfg = LoggingConfig::default().filter("quire_ui=trace");
        assert_eq!(cfg.resolved_filter().as_deref(), Some("quire_ui=trace"));
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::default().level(LevelFilter::Warn));
        init_logging(LoggingConfig::default());
    }
}
