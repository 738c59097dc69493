use crate::app::{App, AppMode};
use crate::ui::keymap::{key_help, key_to_app_event};
use crate::ui::render::{render_footer, render_main_text, render_subtotal};
use crate::ui::theme::colors;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders},
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::Once;
use std::time::Duration;
use tracing::debug;

static PANIC_HOOK_SET: Once = Once::new();

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        set_panic_hook();

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager { terminal })
    }

    /// Forward key presses to the app until it quits.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<AppMode> {
        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(AppMode::Quit);
            }

            if event::poll(POLL_TIMEOUT)? {
                match event::read()? {
                    Event::Key(key) => {
                        let app_event = key_to_app_event(key, &app.config().keys);
                        debug!(?key, ?app_event, "Key event");
                        app.handle_event(app_event);
                    }
                    Event::Resize(_, _) => {}
                    _ => continue,
                }
                self.render_frame(app)?;
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        let help = key_help(&app.config().keys);

        self.terminal.draw(|frame| {
            let area = frame.area();

            let block = Block::default()
                .borders(Borders::ALL)
                .title(" tallykey ")
                .style(Style::default().fg(colors::dimmed()).bg(colors::background()));
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(inner);

            let main_text = render_main_text(&render_state.main_text, rows[1].width);
            frame.render_widget(main_text, rows[1]);

            let subtotal = render_subtotal(&render_state.subtotal_text, rows[2].width);
            frame.render_widget(subtotal, rows[2]);

            let footer = match &render_state.status {
                Some(status) => Some(status.clone()),
                None if render_state.show_key_help => Some(help.clone()),
                None => None,
            };
            if let Some(footer) = footer {
                frame.render_widget(render_footer(&footer), rows[4]);
            }
        })?;

        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Restore the terminal before a panic message is printed.
fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            default_hook(panic_info);
        }));
    });
}
