//! Command-line argument parsing and snapshot loading.

pub mod definition;
pub mod snapshot;
pub mod utils;

pub use definition::Args;
pub use snapshot::{load_panel, load_player};
pub use utils::determine_log_level;
