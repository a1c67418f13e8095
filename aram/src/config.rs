// aram-rs/aram/src/config.rs

use crate::constants::{ARAM_AID, DEFAULT_TRANSFER_LIMIT, MAX_AID_LEN, MIN_AID_LEN};
use crate::{Error, Result};

/// Applet configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppletConfig {
    /// AID answered by SELECT
    pub aid: Vec<u8>,
    /// Maximum response bytes per exchange
    pub transfer_limit: usize,
}

impl AppletConfig {
    /// Start a builder from the defaults.
    pub fn builder() -> AppletConfigBuilder {
        AppletConfigBuilder::new()
    }

    /// Check the invariants the engine relies on. Deserialized configs
    /// should be passed through this before use.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_AID_LEN..=MAX_AID_LEN).contains(&self.aid.len()) {
            return Err(Error::InvalidConfig(format!(
                "aid length {} outside {}..={}",
                self.aid.len(),
                MIN_AID_LEN,
                MAX_AID_LEN
            )));
        }
        if !(1..=DEFAULT_TRANSFER_LIMIT).contains(&self.transfer_limit) {
            return Err(Error::InvalidConfig(format!(
                "transfer limit {} outside 1..={}",
                self.transfer_limit, DEFAULT_TRANSFER_LIMIT
            )));
        }
        Ok(())
    }
}

impl Default for AppletConfig {
    fn default() -> Self {
        Self {
            aid: ARAM_AID.to_vec(),
            transfer_limit: DEFAULT_TRANSFER_LIMIT,
        }
    }
}

/// Helper to construct an [`AppletConfig`] with validation.
pub struct AppletConfigBuilder {
    config: AppletConfig,
}

impl AppletConfigBuilder {
    /// Builder seeded with [`AppletConfig::default`].
    pub fn new() -> Self {
        Self {
            config: AppletConfig::default(),
        }
    }

    /// AID answered by SELECT, 5 to 16 bytes.
    pub fn aid(mut self, aid: impl Into<Vec<u8>>) -> Self {
        self.config.aid = aid.into();
        self
    }

    /// Response bytes per exchange, 1 to 256.
    pub fn transfer_limit(mut self, limit: usize) -> Self {
        self.config.transfer_limit = limit;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<AppletConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for AppletConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
