use rand::{RngCore, rngs::OsRng};

use crate::{config::SchemeConfig, core::Salt, error::CommitError};

/// One commitment/verification exchange.
///
/// Owns the salt for its lifetime. Each session draws its own salt
/// and sessions never share salt or in-flight secret state, so
/// multiple independent sessions can coexist in one process.
pub struct Session {
    config: SchemeConfig,
    salt: Salt,
}

impl Session {
    /// Draws a fresh salt from the OS secure generator. A randomness
    /// failure aborts session creation; a weak salt is never
    /// substituted.
    pub fn new(config: SchemeConfig) -> Result<Self, CommitError> {
        if config.salt_len == 0 {
            return Err(CommitError::ConfigurationError(
                "salt_len must be non-zero".to_string(),
            ));
        }

        let mut bytes = vec![0u8; config.salt_len];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| CommitError::RandomnessUnavailable(e.to_string()))?;

        Ok(Self {
            config,
            salt: Salt { inner: bytes },
        })
    }

    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    pub fn salt(&self) -> &Salt {
        &self.salt
    }
}
