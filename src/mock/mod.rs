mod display;
mod pointer;
mod terminal;

pub use display::TerminalDisplay;
pub use pointer::ScriptedPointer;
pub use terminal::run_interactive_terminal;
