//! CLI command handlers, one per file.

mod get;
mod id;
mod urls;

pub use get::{run_get, GetOptions};
pub use id::run_id;
pub use urls::run_urls;
