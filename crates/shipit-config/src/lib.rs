//! KDL configuration parsing for shipit.
//!
//! Parses `shipit.kdl` stack definitions into [`StackConfig`] values
//! consumed by the synthesizer.

pub mod error;
pub mod stack;

pub use error::{ConfigError, ConfigResult};
pub use stack::{StackConfig, parse_stack};
