pub mod actions;
mod app_state;
mod chat_session;
mod credentials;
mod dashboard;
pub mod events;
mod markdown;
mod scroll;
mod transcript;

pub use app_state::*;
pub use chat_session::*;
pub use credentials::*;
pub use dashboard::*;
pub use markdown::*;
pub use scroll::*;
pub use transcript::*;
