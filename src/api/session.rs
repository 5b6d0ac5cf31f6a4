use std::sync::{Arc, Mutex};

use translit_core::settings::settings;
use translit_session::EditSession;

use super::types::{TranslitDirection, TranslitEditResponse, TranslitStats};

/// Editing session for one text surface, shared with the host.
#[derive(uniffi::Object)]
pub struct TranslitSession {
    session: Mutex<EditSession<'static>>,
}

impl TranslitSession {
    fn with<R>(&self, f: impl FnOnce(&mut EditSession<'static>) -> R) -> R {
        let mut session = self.session.lock().unwrap();
        f(&mut session)
    }
}

#[uniffi::export]
impl TranslitSession {
    /// New empty session using the loaded (or default) settings.
    #[uniffi::constructor]
    pub(super) fn new() -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(EditSession::from_settings(settings())),
        })
    }

    pub(super) fn handle_text(&self, text: String) -> TranslitEditResponse {
        self.with(|s| s.handle_text(&text)).into()
    }

    pub(super) fn backspace(&self) -> TranslitEditResponse {
        self.with(|s| s.backspace()).into()
    }

    pub(super) fn paste(&self, text: String) -> TranslitEditResponse {
        self.with(|s| s.paste(&text)).into()
    }

    pub(super) fn load(&self, text: String) -> TranslitEditResponse {
        self.with(|s| s.load(&text)).into()
    }

    pub(super) fn move_cursor(&self, pos: u32) -> TranslitEditResponse {
        let pos = usize::try_from(pos).unwrap_or(usize::MAX);
        self.with(|s| s.move_cursor(pos)).into()
    }

    pub(super) fn set_direction(&self, direction: TranslitDirection) -> TranslitEditResponse {
        self.with(|s| s.set_direction(direction.into())).into()
    }

    pub(super) fn toggle_direction(&self) -> TranslitEditResponse {
        self.with(|s| s.toggle_direction()).into()
    }

    pub(super) fn set_enabled(&self, enabled: bool) -> TranslitEditResponse {
        self.with(|s| s.set_enabled(enabled)).into()
    }

    pub(super) fn toggle_enabled(&self) -> TranslitEditResponse {
        self.with(|s| s.toggle_enabled()).into()
    }

    pub(super) fn text(&self) -> String {
        self.with(|s| s.text().to_string())
    }

    pub(super) fn cursor(&self) -> u32 {
        self.with(|s| u32::try_from(s.cursor()).unwrap_or(u32::MAX))
    }

    pub(super) fn direction(&self) -> TranslitDirection {
        self.with(|s| s.direction()).into()
    }

    pub(super) fn is_enabled(&self) -> bool {
        self.with(|s| s.is_enabled())
    }

    pub(super) fn stats(&self) -> TranslitStats {
        self.with(|s| s.stats()).into()
    }

    /// Current preferences as TOML for the host's preference store.
    pub(super) fn settings_toml(&self) -> Result<String, super::TranslitError> {
        self.with(|s| s.settings().to_toml())
            .map_err(|e| super::TranslitError::InvalidData { msg: e.to_string() })
    }
}
