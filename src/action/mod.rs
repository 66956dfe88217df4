//! Key events become [`Action`]s, which the handler applies to the app.

mod dispatcher;
mod handler;
mod types;

pub use dispatcher::ActionDispatcher;
pub use handler::ActionHandler;
pub use types::Action;
