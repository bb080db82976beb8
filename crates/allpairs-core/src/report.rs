//! Output artifacts of a finished session.
//!
//! - **output text**: `t` header plus one tab-separated row per case,
//!   columns in original order.
//! - **csv**: output text with `;` separators and `Test`-prefixed rows.
//! - **scored listing**: output text with a trailing `pairings` column.
//! - **coverage report**: every coverage cell with its count and cases.

use std::path::{Path, PathBuf};

use crate::session::GenerationSession;

/// Label of the case-number column.
pub const CASE_COLUMN: &str = "t";

/// Separator of the csv variant.
pub const CSV_SEPARATOR: char = ';';

pub fn output_text(session: &GenerationSession) -> String {
    let mut text = header(session, CASE_COLUMN);
    text.push('\n');
    for record in session.cases() {
        text.push_str(&record.row());
        text.push('\n');
    }
    text
}

/// Output text with `;` separators; rows starting with a digit are
/// prefixed with `Test`.
pub fn csv_text(output_text: &str) -> String {
    let mut csv = String::with_capacity(output_text.len() + 8);
    for line in output_text.lines() {
        if line.starts_with(|ch: char| ch.is_ascii_digit()) {
            csv.push_str("Test");
        }
        csv.push_str(&line.replace('\t', &CSV_SEPARATOR.to_string()));
        csv.push('\n');
    }
    csv
}

/// Output rows with each case's coverage score appended.
pub fn scored_listing(session: &GenerationSession) -> String {
    let mut text = header(session, "test");
    text.push_str("\tpairings\n");
    for record in session.cases() {
        text.push_str(&record.row());
        text.push('\t');
        text.push_str(&record.score.to_string());
        text.push('\n');
    }
    text
}

/// One line per coverage cell, in sorted position order.
pub fn coverage_report(session: &GenerationSession) -> String {
    let table = session.table();
    let mut text = String::from("var1\tvar2\tvalue1\tvalue2\tappearances\tcases\n");
    for (key, cell) in session.matrix().iter() {
        let cases: Vec<String> = cell.cases().iter().map(usize::to_string).collect();
        text.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            table.label(key.c),
            table.label(key.v),
            table.value(key.c, key.x).unwrap_or_default(),
            table.value(key.v, key.y).unwrap_or_default(),
            cell.count(),
            cases.join(","),
        ));
    }
    text
}

/// Write `<base>.txt` and `<base>.csv`.
pub fn write_outputs(
    session: &GenerationSession,
    base: &str,
) -> std::io::Result<(PathBuf, PathBuf)> {
    let txt_path = PathBuf::from(format!("{base}.txt"));
    let csv_path = PathBuf::from(format!("{base}.csv"));
    let text = output_text(session);
    std::fs::write(&txt_path, &text)?;
    std::fs::write(&csv_path, csv_text(&text))?;
    Ok((txt_path, csv_path))
}

/// Output base name for table `index` of a multi-table run: the first run
/// of digits or `$` placeholders in the file name is replaced by the index,
/// otherwise the index is appended.
pub fn enumerated_base(base: &str, index: usize) -> String {
    let name_start = Path::new(base)
        .file_name()
        .map(|name| base.len() - name.len())
        .unwrap_or(0);
    let name = &base[name_start..];
    let is_slot = |ch: char| ch.is_ascii_digit() || ch == '$';

    match name.find(is_slot) {
        Some(start) => {
            let end = name[start..]
                .find(|ch: char| !is_slot(ch))
                .map_or(name.len(), |offset| start + offset);
            format!(
                "{}{}{index}{}",
                &base[..name_start],
                &name[..start],
                &name[end..]
            )
        }
        None => format!("{base}{index}"),
    }
}

fn header(session: &GenerationSession, first: &str) -> String {
    let mut header = first.to_string();
    for label in session.table().labels_in_original_order() {
        header.push('\t');
        header.push_str(label);
    }
    header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_prefixes_numbered_rows() {
        let csv = csv_text("t\tA\tB\n1\ta1\tb1\n12\ta2\tb2\n");
        assert_eq!(csv, "t;A;B\nTest1;a1;b1\nTest12;a2;b2\n");
    }

    #[test]
    fn test_enumerated_base_appends_index() {
        assert_eq!(enumerated_base("out/cases", 0), "out/cases0");
        assert_eq!(enumerated_base("cases", 3), "cases3");
    }

    #[test]
    fn test_enumerated_base_replaces_digits() {
        assert_eq!(enumerated_base("out/run42", 1), "out/run1");
        assert_eq!(enumerated_base("run7_cases", 2), "run2_cases");
        // Digits in the directory part are left alone.
        assert_eq!(enumerated_base("v2/cases", 5), "v2/cases5");
    }

    #[test]
    fn test_enumerated_base_fills_placeholder() {
        assert_eq!(enumerated_base("run$", 0), "run0");
        assert_eq!(enumerated_base("out/run$", 1), "out/run1");
        assert_eq!(enumerated_base("run$$_cases", 2), "run2_cases");
        assert_eq!(enumerated_base("run$1", 3), "run3");
    }
}
