// src/specs/mod.rs
//! # Page specs
//!
//! Each spec encodes *where the data lives* in one kind of saved page and
//! *how to pull it out*. Specs are pure: they take decoded page text and
//! return data, with no file access and no rendering.
//!
//! ## Conventions
//! - Look things up through the DOM (`scraper`) and fall back to document
//!   order when the page layout does not nest data under its row.
//! - Never fail on a missing field. Use the placeholder from
//!   `config::consts` instead, so every input file shows up in the report.
//! - Keep specs testable offline against inline fixtures.
//!
//! ## Current specs
//! - `patents`: INPI "pesquisa por CPF/CNPJ do depositante" result pages.
pub mod patents;
