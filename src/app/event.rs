/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    /// A character for the calculator
    Input(char),
    Undo,
    Clear,
    Copy,
    Quit,
    None,
}
