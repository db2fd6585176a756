//! FDP Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging for the FDP workspace members.
//!
//! # Overview
//!
//! - **Error Handling**: the pipeline error taxonomy and result type
//! - **Logging**: tracing subscriber configuration and initialization
//!
//! # Example
//!
//! ```no_run
//! use fdp_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{EtlError, Result};
