// src/render.rs
//
// Fixed HTML/CSS template for the consolidated report. One <tr> per record;
// the file's label, CNPJ and result count repeat on each of its records.

use std::fmt::Write;

use crate::config::consts::{REPORT_HEADERS, REPORT_TITLE};
use crate::core::sanitize::escape_html;
use crate::data::{FileSummary, Record};
use crate::error::Result;

const STYLE: &str = r#"        table {
            border-collapse: collapse;
            width: 100%;
        }
        th, td {
            border: 1px solid black;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #f2f2f2;
        }
"#;

pub fn render_report(files: &[FileSummary]) -> Result<String> {
    let rows: usize = files.iter().map(|f| f.records.len()).sum();
    let mut out = String::with_capacity(1024 + rows * 320);

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "    <meta charset=\"utf-8\">")?;
    writeln!(out, "    <title>{REPORT_TITLE}</title>")?;
    writeln!(out, "    <style>\n{STYLE}    </style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "    <h1>{REPORT_TITLE}</h1>")?;
    writeln!(out, "    <table>")?;

    writeln!(out, "        <tr>")?;
    for h in REPORT_HEADERS {
        writeln!(out, "            <th>{h}</th>")?;
    }
    writeln!(out, "        </tr>")?;

    for file in files {
        for record in &file.records {
            write_row(&mut out, file, record)?;
        }
    }

    writeln!(out, "    </table>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(out)
}

fn write_row(out: &mut String, file: &FileSummary, record: &Record) -> std::fmt::Result {
    let cells: [&str; 7] = [
        file.label.as_str(),
        &file.tax_id,
        &file.result_count,
        &record.application_number,
        &record.filing_date,
        &record.title,
        &record.classification,
    ];
    writeln!(out, "        <tr>")?;
    for cell in cells {
        writeln!(out, "            <td>{}</td>", escape_html(cell))?;
    }
    writeln!(out, "        </tr>")
}
