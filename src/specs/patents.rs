// src/specs/patents.rs
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

use crate::config::consts::*;
use crate::core::html::{attr_is, enclosing, following, has_class, is_tag, text_stripped, text_trimmed};
use crate::core::repair::repair_title;
use crate::core::sanitize::or_placeholder;
use crate::data::{FileSummary, Record};

// Selector/regex sources are compile-time constants; parsing them cannot fail.
static TAX_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(TAX_ID_PATTERN).unwrap());
static RESULT_COUNT_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(RESULT_COUNT_SELECTOR).unwrap());
static BOLD_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("b").unwrap());
static RECORD_ANCHOR_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(RECORD_ANCHOR_SELECTOR).unwrap());

/// Parse one decoded result page into a summary labelled `label`.
pub fn parse_doc(label: &str, html_doc: &str) -> FileSummary {
    let doc = Html::parse_document(html_doc);

    let tax_id = extract_tax_id(&doc, html_doc).unwrap_or_else(|| s!(NO_TAX_ID));
    let result_count = extract_result_count(&doc).unwrap_or_else(|| s!(NO_RESULTS));

    let mut records = if result_count != NO_RESULTS {
        extract_records(&doc)
    } else {
        Vec::new()
    };

    let placeholder_only = records.is_empty();
    if placeholder_only {
        if result_count != NO_RESULTS {
            log::warn!("{label}: page reports {result_count} results but no rows were found");
        }
        records.push(Record::placeholder());
    }

    log::debug!(
        "{label}: tax id {:?}, {} results, {} rows",
        tax_id,
        result_count,
        records.len()
    );

    FileSummary { label: s!(label), tax_id, result_count, records, placeholder_only }
}

/* ---------------- helpers ---------------- */

/// The applicant's CNPJ as quoted in the search summary line.
/// Matched against each decoded text node (script bodies included) and comment,
/// in document order; the raw markup is only a last resort.
fn extract_tax_id(doc: &Html, html_doc: &str) -> Option<String> {
    doc.tree
        .root()
        .descendants()
        .find_map(|node| match node.value() {
            Node::Text(t) => capture_tax_id(&**t),
            Node::Comment(c) => capture_tax_id(&**c),
            _ => None,
        })
        .or_else(|| capture_tax_id(html_doc))
}

fn capture_tax_id(text: &str) -> Option<String> {
    TAX_ID_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| s!(m.as_str()))
}

/// First `<b>` inside the results header div.
fn extract_result_count(doc: &Html) -> Option<String> {
    let div = doc.select(&RESULT_COUNT_SEL).next()?;
    let b = div.select(&BOLD_SEL).next()?;
    Some(text_trimmed(b))
}

/// Record rows in document order, each paired with the anchor that marks it.
/// A row counts once, for its first anchor; an anchor belongs to its nearest `<tr>`
/// so layout tables wrapping the results never count as rows.
fn record_rows(doc: &Html) -> Vec<(ElementRef<'_>, ElementRef<'_>)> {
    let mut rows: Vec<(ElementRef<'_>, ElementRef<'_>)> = Vec::new();
    for anchor in doc.select(&RECORD_ANCHOR_SEL) {
        let Some(tr) = enclosing(anchor, "tr") else { continue };
        if rows.iter().any(|(seen, _)| *seen == tr) {
            continue;
        }
        rows.push((tr, anchor));
    }
    rows
}

fn extract_records(doc: &Html) -> Vec<Record> {
    let rows = record_rows(doc);
    let mut out = Vec::with_capacity(rows.len());

    for (i, &(tr, anchor)) in rows.iter().enumerate() {
        // Cells are looked up forward from the row start, but never past the next record row.
        let stop = rows.get(i + 1).map(|(next, _)| *next);
        out.push(extract_record(tr, anchor, stop));
    }
    out
}

fn extract_record<'a>(
    tr: ElementRef<'a>,
    anchor: ElementRef<'a>,
    stop: Option<ElementRef<'a>>,
) -> Record {
    let application_number = text_trimmed(anchor);

    // Number cell is the first centered cell; the filing date is the second.
    let filing_date = following(tr, stop)
        .filter(|e| is_tag(*e, "td") && attr_is(*e, "align", "center"))
        .nth(1)
        .map(text_trimmed)
        .unwrap_or_default();
    let filing_date = or_placeholder(filing_date, NO_DATE);

    let title = following(tr, stop)
        .find(|e| is_tag(*e, "td") && attr_is(*e, "align", "left"))
        .map(text_stripped)
        .map(repair_title)
        .unwrap_or_default();
    let title = or_placeholder(title, EMPTY_FIELD);

    let classification = following(tr, stop)
        .find(|e| is_tag(*e, "font") && has_class(*e, CLASSIFICATION_CLASS))
        .map(text_trimmed)
        .unwrap_or_else(|| s!(EMPTY_FIELD));

    Record { application_number, filing_date, title, classification }
}
