use crate::app::mode::AppMode;
use crate::calc::Session;
use crate::config::DisplayConfig;

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub main_text: String,
    /// Empty when there is nothing to show or the subtotal is hidden
    pub subtotal_text: String,
    pub status: Option<String>,
    pub show_key_help: bool,
}

impl RenderState {
    /// Create render state from the current session
    pub fn from_session(
        mode: AppMode,
        session: &Session,
        display: &DisplayConfig,
        status: Option<String>,
    ) -> Self {
        let subtotal_text = if display.show_subtotal {
            session.subtotal_text().to_string()
        } else {
            String::new()
        };

        Self {
            mode,
            main_text: session.main_text().to_string(),
            subtotal_text,
            status,
            show_key_help: display.show_key_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_subtotal_is_blank() {
        let mut session = Session::new();
        session.ingest_str("4+");
        let display = DisplayConfig {
            show_subtotal: false,
            show_key_help: true,
        };
        let state = RenderState::from_session(AppMode::Calculating, &session, &display, None);
        assert_eq!(state.main_text, "4+");
        assert_eq!(state.subtotal_text, "");
    }

    #[test]
    fn test_subtotal_shown_by_default() {
        let mut session = Session::new();
        session.ingest_str("4+");
        let state = RenderState::from_session(
            AppMode::Calculating,
            &session,
            &DisplayConfig::default(),
            None,
        );
        assert_eq!(state.subtotal_text, "4");
        assert!(state.show_key_help);
    }
}
