// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod data;
pub mod error;
pub mod file;
pub mod logger;
pub mod progress;
pub mod render;
pub mod runner;

pub use error::{ReportError, Result};
