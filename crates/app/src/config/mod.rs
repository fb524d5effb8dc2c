//! Application configuration

use clap::Args;

pub use handoff::HandoffConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use store::StoreConfig;

mod handoff;
mod logging;
mod store;

/// Petalo configuration, read from CLI arguments and the environment.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Document store settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Quote hand-off settings.
    #[command(flatten)]
    pub handoff: HandoffConfig,
}

impl AppConfig {
    /// Load `.env` into the process environment, if present.
    pub fn load_env() {
        _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        config: AppConfig,
    }

    #[test]
    fn defaults_target_the_chilean_shop() -> TestResult {
        let harness = Harness::try_parse_from(["petalo"])?;

        assert_eq!(harness.config.handoff.phone, "56993177866");
        assert_eq!(harness.config.handoff.currency, "CLP");
        assert!(matches!(harness.config.logging.log_format, LogFormat::Compact));

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let harness = Harness::try_parse_from([
            "petalo",
            "--seed",
            "/tmp/tienda.json",
            "--currency",
            "USD",
            "--log-format",
            "json",
        ])?;

        assert_eq!(harness.config.store.seed.to_str(), Some("/tmp/tienda.json"));
        assert_eq!(harness.config.handoff.currency, "USD");
        assert!(matches!(harness.config.logging.log_format, LogFormat::Json));

        Ok(())
    }
}
