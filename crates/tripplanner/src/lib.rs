//! `tripplanner` - An interactive travel itinerary planner
//!
//! This library provides the core types behind the `triplan` binary: a
//! hand-managed dynamic array, the destination record it stores, and the
//! menu shell that drives both from the console. Everything lives in memory;
//! the itinerary is gone when the session ends.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod array;
pub mod cli;
pub mod config;
pub mod destination;
pub mod error;
pub mod logging;
pub mod shell;

pub use array::DynArray;
pub use config::Config;
pub use destination::Destination;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use shell::Shell;
