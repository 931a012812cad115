// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod file;
pub mod html;
pub mod link;
pub mod normalize;
pub mod progress;
pub mod runner;
pub mod store;

pub use error::{ShortlistError, ShortlistResult};
