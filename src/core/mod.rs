// src/core/mod.rs

pub mod encoding;
pub mod html;
pub mod repair;
pub mod sanitize;
