//! Long-lived data shared with systems.
//!
//! Overview
//! - `animationclip` – one named animation and its frame count
//! - `framecatalog` – frames grouped into clips, addressed by [`FrameKey`](framecatalog::FrameKey)
//! - `framerate` – the host's target frames per second
//! - `framesource` – where frames come from (directory, manifest, memory)
//! - `playerconfig` – INI-backed player configuration
//! - `rendersink` – the host renderer frames are handed to
pub mod animationclip;
pub mod framecatalog;
pub mod framerate;
pub mod framesource;
pub mod playerconfig;
pub mod rendersink;
