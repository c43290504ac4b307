//! Matchup table rendering

use pairing_core::Report;

/// Render the report as a fixed-width text table.
///
/// One row per participant: their wait interval, then `count / score` for
/// every opponent, `--` on the diagonal and for players who never played.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    if report.is_empty() {
        out.push_str("No eligible participants.\n");
        return out;
    }

    let label_width = report
        .rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);
    let cell_width = label_width.max(9);

    out.push_str(&format!("{:<label_width$} {:>5}", "", "Wait"));
    for row in &report.rows {
        out.push_str(&format!(" {:>cell_width$}", row.label));
    }
    out.push('\n');
    out.push_str(&"-".repeat(label_width + 6 + (cell_width + 1) * report.rows.len()));
    out.push('\n');

    for row in &report.rows {
        out.push_str(&format!("{:<label_width$} {:>5}", row.label, row.wait.to_string()));
        for cell in &row.cells {
            let text = match cell {
                Some(cell) => format!("{} / {}", cell.matchup_count, cell.score),
                None => "--".to_string(),
            };
            out.push_str(&format!(" {:>cell_width$}", text));
        }
        out.push('\n');
    }

    out
}

/// Print report to stdout
pub fn print_report(report: &Report) {
    println!("{}", render_report(report));
}
