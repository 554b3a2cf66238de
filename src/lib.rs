//! Small helpers around YouTube video metadata.
//!
//! * [format_duration] turns the ISO 8601 durations YouTube reports (`PT1H2M30S`)
//!   into clock strings (`1:02:30`).
//! * [YoutubeClient::view_count] fetches a video's view count from the YouTube Data API v3.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = yt_stats::Config::read()?.with_env();
//! let _guard = yt_stats::log::install_tracing(&config.logging)?;
//!
//! let client = yt_stats::setup::client(&config);
//! let views = client.view_count("dQw4w9WgXcQ").await?;
//! println!("{views} views, {}", yt_stats::format_duration("PT3M33S"));
//! # Ok(())
//! # }
//! ```

pub mod duration;
pub mod error;
pub mod log;
pub mod setup;
pub mod youtube;

pub use duration::{format_duration, IsoDuration};
pub use error::{ConfigError, YoutubeError};
pub use setup::Config;
pub use youtube::{FetchJson, YoutubeClient};
