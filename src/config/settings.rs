//! Engine-wide defaults loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::PoolConfig;
use crate::domain::Identity;
use crate::error::{Result, SwapError};

/// Default deposit ratio tolerance: 1%.
pub const DEFAULT_RATIO_TOLERANCE_BPS: u16 = 100;

/// Default withdrawal lock after a deposit: five minutes.
pub const DEFAULT_WITHDRAWAL_LOCK_SECS: u64 = 300;

/// Defaults applied to every [`PoolConfig`] built through
/// [`pool_config`](Self::pool_config).
///
/// Every key is optional in the TOML source; missing keys keep their
/// defaults.
///
/// ```toml
/// admin_fee_share_bps = 1666
/// ratio_tolerance_bps = 50
/// withdrawal_lock_secs = 0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    /// Share of each swap fee owed to the admin fee account.
    pub admin_fee_share_bps: u16,
    /// Allowed deviation of a deposit from the reserve ratio.
    pub ratio_tolerance_bps: u16,
    /// Seconds between a deposit and the next allowed withdrawal.
    pub withdrawal_lock_secs: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            admin_fee_share_bps: 0,
            ratio_tolerance_bps: DEFAULT_RATIO_TOLERANCE_BPS,
            withdrawal_lock_secs: DEFAULT_WITHDRAWAL_LOCK_SECS,
        }
    }
}

impl EngineSettings {
    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Configuration`] on malformed TOML, unknown keys,
    /// or basis-point values above 10 000.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings: Self =
            toml::from_str(source).map_err(|e| SwapError::Configuration(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads and parses a TOML settings file.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Configuration`] if the file cannot be read or
    /// parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| SwapError::Configuration(format!("{}: {e}", path.display())))?;
        let settings = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), ?settings, "loaded engine settings");
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.admin_fee_share_bps > 10_000 || self.ratio_tolerance_bps > 10_000 {
            return Err(SwapError::Configuration(
                "basis-point settings must not exceed 10000".to_owned(),
            ));
        }
        Ok(())
    }

    /// Builds a [`PoolConfig`] carrying these defaults.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn pool_config(
        &self,
        mint_a: Identity,
        mint_b: Identity,
        fee_bps: u16,
        admin: Identity,
        admin_fee_account: Identity,
        initial_reserve_a: u64,
        initial_reserve_b: u64,
    ) -> PoolConfig {
        PoolConfig::from_parts(
            mint_a,
            mint_b,
            fee_bps,
            admin,
            admin_fee_account,
            initial_reserve_a,
            initial_reserve_b,
            self,
        )
    }
}
