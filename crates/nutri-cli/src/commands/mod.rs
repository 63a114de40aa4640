mod config;
mod foods;
mod misc;
mod session;
mod summary;

pub use config::{handle_config_init, handle_config_show};
pub use foods::handle_foods;
pub use misc::handle_completions;
pub use session::handle_session;
pub use summary::handle_summary;
