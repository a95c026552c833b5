use util::config::AppConfig;

/// Reloads the config from the environment now and again when dropped, so an
/// override set by a test never outlives it, even on a failed assertion.
pub struct ConfigOverride;

impl ConfigOverride {
    pub fn begin() -> Self {
        AppConfig::reset();
        ConfigOverride
    }
}

impl Drop for ConfigOverride {
    fn drop(&mut self) {
        AppConfig::reset();
    }
}
