//! App Configuration

/// Slot in local storage holding the serialized list
pub const STORAGE_KEY: &str = "shoppingItems";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Storage key for the persisted list
    pub storage_key: String,
    /// Minimum level forwarded to the browser console
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_storage_key() {
        assert_eq!(AppConfig::default().storage_key, "shoppingItems");
    }
}
