// src/data.rs
//
// Plain data carried from the per-file parse to the renderer.
//
// - Record:      one result row of a search page.
// - FileSummary: everything pulled out of one page, plus its synthetic label.
//
// Both are built once and only read afterwards.

use crate::config::consts::EMPTY_FIELD;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub application_number: String,
    pub filing_date: String,
    pub title: String,
    pub classification: String,
}

impl Record {
    /// Row used when a page has nothing to show: every column "-".
    pub fn placeholder() -> Self {
        Self {
            application_number: s!(EMPTY_FIELD),
            filing_date: s!(EMPTY_FIELD),
            title: s!(EMPTY_FIELD),
            classification: s!(EMPTY_FIELD),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSummary {
    /// ARQUIVO1, ARQUIVO2, ... by sorted position in the input folder.
    pub label: String,
    /// 14-digit CNPJ, or empty when the page does not carry one.
    pub tax_id: String,
    /// Count as printed by the page ("0" when missing). Kept as text; the
    /// page may report more results than it lists.
    pub result_count: String,
    /// Never empty: pages without rows carry a single placeholder record.
    pub records: Vec<Record>,
    /// Set when `records` holds only that placeholder.
    pub placeholder_only: bool,
}

impl FileSummary {
    /// Records that came from the page; empty when only the placeholder is there.
    pub fn real_records(&self) -> &[Record] {
        if self.placeholder_only { &[] } else { &self.records }
    }
}
