//! Precision-keyed cache of formatting rules.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::rule::{FormatConfig, FormatRule};
use crate::error::{FormatError, FormatResult};

/// Read-through cache: precision → shared rule.
///
/// Entries are never invalidated; a rule is immutable once built. Rules are
/// derived from one `FormatConfig`: the first formatter to use the cache binds
/// it, and formatters with any other config are refused.
#[derive(Debug, Default)]
pub struct RuleCache {
    config: OnceLock<FormatConfig>,
    rules: RwLock<HashMap<u32, Arc<FormatRule>>>,
}

impl RuleCache {
    /// Unbound cache; the first formatter built with it sets its config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache bound to `config` up front.
    pub fn with_config(config: FormatConfig) -> Self {
        Self {
            config: OnceLock::from(config),
            rules: RwLock::default(),
        }
    }

    pub fn config(&self) -> Option<&FormatConfig> {
        self.config.get()
    }

    /// Binds the cache to `config`, or checks it matches the bound one.
    pub fn bind(&self, config: &FormatConfig) -> FormatResult<()> {
        let bound = self.config.get_or_init(|| config.clone());
        if bound != config {
            return Err(FormatError::InvalidConfig(format!(
                "rule cache is bound to {:?}, cannot serve {:?}",
                bound, config
            )));
        }
        Ok(())
    }

    pub fn get(&self, precision: u32) -> Option<Arc<FormatRule>> {
        self.read().get(&precision).cloned()
    }

    /// Returns the cached rule for `precision`, building it with `make` on
    /// first request. At most one rule is ever stored per precision.
    pub fn get_or_try_insert_with<F>(&self, precision: u32, make: F) -> FormatResult<Arc<FormatRule>>
    where
        F: FnOnce() -> FormatResult<FormatRule>,
    {
        if let Some(rule) = self.get(precision) {
            return Ok(rule);
        }

        let mut rules = self.write();
        // Another thread may have won the race between the two locks.
        if let Some(rule) = rules.get(&precision) {
            return Ok(rule.clone());
        }
        let rule = Arc::new(make()?);
        rules.insert(precision, rule.clone());
        tracing::debug!("Cached format rule for precision {}", precision);
        Ok(rule)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        let mut rules = self.write();
        tracing::debug!("Clearing {} cached format rule(s)", rules.len());
        rules.clear();
    }

    // The map is consistent after every write, so a poisoned lock is safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<u32, Arc<FormatRule>>> {
        self.rules.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<u32, Arc<FormatRule>>> {
        self.rules.write().unwrap_or_else(PoisonError::into_inner)
    }
}
