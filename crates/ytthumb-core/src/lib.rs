pub mod config;
pub mod logging;

pub mod error;
pub mod fallback;
pub mod fetch;
pub mod save;
pub mod session;
pub mod tier;
pub mod video_id;

pub use error::{ErrorKind, ThumbError};
pub use video_id::VideoId;
