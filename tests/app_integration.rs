use tallykey::app::{App, AppMode};
use tallykey::cli::Cli;
use clap::Parser;

#[test]
fn headless_script_from_command_line() {
    let cli = Cli::try_parse_from(["tallykey", "--eval", "-12+3<5=", "--no-subtotal"]).unwrap();
    assert!(cli.is_headless());

    let mut app = App::new(cli.config());
    app.run_script(cli.eval.as_deref().unwrap());

    let state = app.get_render_state();
    assert_eq!(state.mode, AppMode::Calculating);
    assert_eq!(state.main_text, "-7");
    assert_eq!(state.subtotal_text, "");
}

#[test]
fn script_clear_key_resets() {
    let cli = Cli::try_parse_from(["tallykey"]).unwrap();
    let mut app = App::new(cli.config());
    app.run_script("99×2c4+");
    let state = app.get_render_state();
    assert_eq!(state.main_text, "4+");
    assert_eq!(state.subtotal_text, "4");
}
