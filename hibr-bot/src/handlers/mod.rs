//! Handlers of the decoration bot, in chain order: registration, start, admin, decorate.

mod admin;
mod decorate;
mod registration;
mod start;

pub use admin::AdminHandler;
pub use decorate::DecorateHandler;
pub use registration::RegistrationHandler;
pub use start::StartHandler;
