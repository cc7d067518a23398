//! CLI command handlers.

mod config;
mod fetch;
mod verify_image;

pub use config::run_config;
pub use fetch::{run_fetch, FetchArgs};
pub use verify_image::run_verify_image;
