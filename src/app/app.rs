use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::calc::Session;
use crate::clipboard::copy_to_clipboard;
use crate::config::Config;
use crate::ui::keymap::char_to_app_event;
use tracing::{debug, info, warn};

pub struct App {
    mode: AppMode,
    session: Session,
    config: Config,
    status: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            mode: AppMode::Calculating,
            session: Session::new(),
            config,
            status: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        if event != AppEvent::None {
            self.status = None;
        }

        match event {
            AppEvent::Input(c) => {
                if let Err(e) = self.session.ingest(c) {
                    debug!(%e, "Input rejected");
                }
            }
            AppEvent::Undo => self.session.undo(),
            AppEvent::Clear => self.session.reset(),
            AppEvent::Copy => self.copy_main_text(),
            AppEvent::Quit => {
                info!("Quitting");
                self.mode = AppMode::Quit;
            }
            AppEvent::None => {}
        }
    }

    /// Feed a key script, stopping early at the quit key.
    pub fn run_script(&mut self, keys: &str) {
        for c in keys.chars() {
            let event = char_to_app_event(c, &self.config.keys);
            self.handle_event(event);
            if self.mode == AppMode::Quit {
                break;
            }
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState::from_session(
            self.mode,
            &self.session,
            &self.config.display,
            self.status.clone(),
        )
    }

    fn copy_main_text(&mut self) {
        let text = self.session.main_text().to_string();
        match copy_to_clipboard(&text) {
            Ok(()) => self.status = Some(format!("Copied {}", text)),
            Err(e) => {
                warn!(%e, "Copy failed");
                self.status = Some(e.to_string());
            }
        }
    }
}
