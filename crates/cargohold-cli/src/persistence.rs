//! Inert data persistence stand-in used by the menu's save/retrieve commands.

use tracing::debug;

/// Value returned by every retrieve call.
pub const PLACEHOLDER_DATA: &str = "Placeholder data";

/// Accepts saves and serves a fixed placeholder. Nothing is written anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataPersistence;

impl DataPersistence {
    pub fn new() -> Self {
        Self
    }

    /// Save data. Always succeeds and echoes the input back.
    pub fn save_data(&self, data: &str) -> String {
        debug!(bytes = data.len(), "save requested");
        format!("Data saved: {data}")
    }

    pub fn retrieve_data(&self) -> &'static str {
        PLACEHOLDER_DATA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_echoes_input() {
        assert_eq!(
            DataPersistence::new().save_data("manifest 42"),
            "Data saved: manifest 42"
        );
    }

    #[test]
    fn retrieve_returns_placeholder() {
        let store = DataPersistence::new();
        store.save_data("ignored");
        assert_eq!(store.retrieve_data(), "Placeholder data");
    }
}
