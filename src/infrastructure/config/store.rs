//! Process-wide configuration store with whole-value swap semantics.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use super::ProviderConfiguration;
use crate::domain::entities::DisplayMode;
use crate::domain::errors::ConfigurationError;
use crate::domain::ports::GifProviderPort;
use crate::infrastructure::providers::select_provider;

/// A validated configuration together with its selected provider client.
pub struct InstalledConfig {
    /// The raw settings this installation was built from.
    pub settings: ProviderConfiguration,
    /// Parsed display mode.
    pub display_mode: DisplayMode,
    /// The active provider client.
    pub provider: Arc<dyn GifProviderPort>,
}

impl InstalledConfig {
    fn build(settings: ProviderConfiguration) -> Result<Self, ConfigurationError> {
        if settings.display_mode.trim().is_empty() {
            return Err(ConfigurationError::MissingDisplayMode);
        }
        let display_mode = DisplayMode::from_name(&settings.display_mode)
            .ok_or_else(|| ConfigurationError::unknown_display_mode(&settings.display_mode))?;
        let provider = select_provider(&settings)?;

        Ok(Self {
            settings,
            display_mode,
            provider,
        })
    }
}

/// The only cross-request shared state: the installed configuration.
///
/// Readers take an `Arc` snapshot under the read lock and never observe a
/// partially-updated value; writers validate outside the lock and replace the
/// whole installation at once.
#[derive(Default)]
pub struct ConfigStore {
    current: RwLock<Option<Arc<InstalledConfig>>>,
}

impl ConfigStore {
    /// Creates an empty, not-yet-configured store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and installs a new configuration, replacing the old one.
    ///
    /// # Errors
    /// Returns a configuration error when validation fails, or `Unchanged`
    /// when the new value equals the installed one, to catch accidental
    /// no-op updates.
    pub fn install(&self, settings: ProviderConfiguration) -> Result<(), ConfigurationError> {
        let installed = InstalledConfig::build(settings)?;

        let mut guard = self.current.write();
        if let Some(current) = guard.as_ref() {
            if current.settings == installed.settings {
                return Err(ConfigurationError::Unchanged);
            }
        }
        info!(
            provider = %installed.provider.name(),
            display_mode = %installed.display_mode,
            "Configuration installed"
        );
        *guard = Some(Arc::new(installed));
        Ok(())
    }

    /// Returns an immutable snapshot of the installed configuration.
    ///
    /// # Errors
    /// Returns `NotConfigured` before the first successful install.
    pub fn snapshot(&self) -> Result<Arc<InstalledConfig>, ConfigurationError> {
        self.current
            .read()
            .clone()
            .ok_or(ConfigurationError::NotConfigured)
    }
}

#[cfg(test)]
impl ConfigStore {
    /// Installs a prebuilt configuration, bypassing validation.
    pub(crate) fn install_prebuilt(&self, installed: InstalledConfig) {
        *self.current.write() = Some(Arc::new(installed));
    }
}
