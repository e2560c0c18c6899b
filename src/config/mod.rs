//! Configuration loading and management for the timecard engine.
//!
//! This module loads the default work settings and the leave code catalog
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use timecard_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Configured shifts: {}", config.settings().shifts.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LeaveCatalog, LeaveCode, TimecardConfig};
