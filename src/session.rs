use crate::error::{InferenceError, Result};

/// Per-session UI state, owned by the presentation layer and passed to
/// whatever reads it. There is no ambient global behind this; dropping the
/// value is the only way the selection goes away.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    selected_model: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a model selection. Selecting again replaces the previous
    /// value; nothing else ever clears it.
    pub fn select_model(&mut self, model_id: impl Into<String>) {
        self.selected_model = Some(model_id.into());
    }

    pub fn selected_model(&self) -> Option<&str> {
        self.selected_model.as_deref()
    }

    pub fn has_selection(&self) -> bool {
        self.selected_model.is_some()
    }

    /// The selected model id, or a configuration error when no selection has
    /// been made yet. Callers use this to fail before any request is built.
    pub fn require_model(&self) -> Result<&str> {
        self.selected_model
            .as_deref()
            .ok_or_else(|| InferenceError::ConfigError("No model selected".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_starts_absent() {
        let state = SessionState::new();
        assert!(!state.has_selection());
        assert!(state.require_model().is_err());
    }

    #[test]
    fn test_selection_persists_until_reselected() {
        let mut state = SessionState::new();
        state.select_model("sd-community/sdxl-flash");
        assert_eq!(state.selected_model(), Some("sd-community/sdxl-flash"));
        assert_eq!(state.require_model().unwrap(), "sd-community/sdxl-flash");

        state.select_model("Kwai-Kolors/Kolors");
        assert_eq!(state.selected_model(), Some("Kwai-Kolors/Kolors"));
    }
}
