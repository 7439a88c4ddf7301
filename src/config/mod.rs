//! Configuration loading for the Shift Earnings Engine.
//!
//! This module loads compensation profiles and recorded work intervals from
//! YAML files so they can be fed to the aggregator.
//!
//! # Example
//!
//! ```no_run
//! use earnings_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sample").unwrap();
//! println!("Loaded {} profiles", config.profiles().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, ProfilesConfig, ShiftsFile};
