//! Support utilities for the Spark RAPIDS user tools command line.
//!
//! - [`paths`]: canonical local paths and URIs for path-like arguments
//! - [`case`]: snake_case / camelCase / PascalCase conversions
//! - [`bootstrap`]: run identifier, log location and log directory setup
//! - [`env_store`]: the namespaced environment store bootstrap publishes into

pub mod banner;
pub mod bootstrap;
pub mod case;
pub mod cli;
pub mod command;
pub mod env_store;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod paths;

pub use bootstrap::{initialize, RunContext};
pub use case::{to_camel_capital_case, to_camel_case, to_snake_case};
pub use env_store::{EnvStore, MemoryEnv, ProcessEnv};
pub use error::{Result, ToolsError};
pub use paths::{is_http_like, stringify_path, to_uri, PathLike};
