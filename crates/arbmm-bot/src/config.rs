//! Application configuration.

use arbmm_mm::{ArbConfig, ArbMarketMaker, MeanReversionConfig, MeanReversionMaker, Strategy};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Which strategy the replay drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Arbitrage,
    MeanReversion,
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub strategy: StrategyKind,

    #[serde(default)]
    pub arbitrage: ArbConfig,

    #[serde(default)]
    pub mean_reversion: MeanReversionConfig,
}

impl AppConfig {
    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config {path}: {e}")))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Build the selected strategy, validating its section.
    pub fn build_strategy(&self) -> AppResult<Box<dyn Strategy>> {
        let strategy: Box<dyn Strategy> = match self.strategy {
            StrategyKind::Arbitrage => {
                if self.arbitrage.instruments.is_empty() {
                    return Err(AppError::Config(
                        "arbitrage strategy needs at least one [[arbitrage.instruments]]".to_string(),
                    ));
                }
                Box::new(ArbMarketMaker::new(self.arbitrage.clone())?)
            }
            StrategyKind::MeanReversion => {
                Box::new(MeanReversionMaker::new(self.mean_reversion.clone())?)
            }
        };
        Ok(strategy)
    }
}
