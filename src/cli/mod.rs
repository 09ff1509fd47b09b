//! Interactive presentation layer: prompts and the menu loop.

mod menu;
mod prompt;

pub use menu::Menu;
pub use prompt::Prompter;
