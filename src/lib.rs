//! Shot+ Statistics Web Service Library
//!
//! A small read-only reporting service over a table of competitive shooting
//! results. The dataset is loaded from CSV once at startup and shared,
//! immutable, by every request.
//!
//! ## Features
//!
//! - **Player Search**: Per-tournament result rows plus yearly and overall
//!   shots-weighted subtotals for a queried player
//! - **Leaderboard**: All players ranked by shots-weighted Adjusted Rating
//! - **Lenient Loading**: Unparseable numeric cells fall back to fixed
//!   defaults; missing files or columns fail fast at startup
//! - **Stateless Serving**: No locks, no writes — every request computes over
//!   the same in-memory table
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shotplus::{queries, Dataset};
//!
//! # fn example() -> shotplus::Result<()> {
//! let dataset = Dataset::from_path("Shot+ Database.csv")?;
//! let rows = queries::search(&dataset, "ali");
//! let ranked = queries::leaderboard(&dataset);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the service at a dataset and port without CLI flags:
//! ```bash
//! export SHOTPLUS_DATA="Shot+ Database.csv"
//! export PORT=5000
//! ```

pub mod dataset;
pub mod error;
pub mod queries;
pub mod server;
pub mod stats;

// Re-export commonly used types
pub use dataset::{Dataset, Row};
pub use error::{Result, ShotPlusError};
pub use queries::{LeaderboardRecord, SearchRecord};

pub const DATA_ENV_VAR: &str = "SHOTPLUS_DATA";
pub const PORT_ENV_VAR: &str = "PORT";

/// Dataset filename used when neither `--data` nor [`DATA_ENV_VAR`] is set.
pub const DEFAULT_DATA_FILE: &str = "Shot+ Database.csv";

/// Port used when neither `--port` nor [`PORT_ENV_VAR`] is set.
pub const DEFAULT_PORT: u16 = 5000;
