mod action;
mod author;
mod backend;
mod event;
mod loading;
mod panel;
mod slash_commands;
mod textarea;
mod turn;

pub use action::*;
pub use author::*;
pub use backend::*;
pub use event::*;
pub use loading::*;
pub use panel::*;
pub use slash_commands::*;
pub use textarea::*;
pub use turn::*;
