use clap::Parser;
use tallykey::app::App;
use tallykey::cli::Cli;
use tallykey::logging;
use tallykey::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.config();
    logging::init(&config.log, cli.is_headless())?;

    let mut app = App::new(config);

    if let Some(keys) = cli.eval.as_deref() {
        app.run_script(keys);
        let state = app.get_render_state();
        println!("{}", state.main_text);
        if !state.subtotal_text.is_empty() {
            println!("= {}", state.subtotal_text);
        }
        return Ok(());
    }

    // The TUI handles all input until the user quits
    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
