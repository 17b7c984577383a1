use npvatlas::prelude::*;

const HEADERS: [&str; 5] = ["scenario", "mean_NPV", "median_NPV", "p5_NPV", "p95_NPV"];

/// Fixed-width table, one row per scenario, numbers right-aligned with two decimals.
pub fn render_table(summary: &[SummaryRecord]) -> String {
    let rows: Vec<[String; 5]> = summary
        .iter()
        .map(|s| {
            [
                s.scenario.label().to_string(),
                format!("{:.2}", s.mean_npv),
                format!("{:.2}", s.median_npv),
                format!("{:.2}", s.p5_npv),
                format!("{:.2}", s.p95_npv),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.len());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                format!("{:<w$}", h, w = widths[i])
            } else {
                format!("{:>w$}", h, w = widths[i])
            }
        })
        .collect();
    out.push_str(&header.join("  "));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i == 0 {
                    format!("{:<w$}", c, w = widths[i])
                } else {
                    format!("{:>w$}", c, w = widths[i])
                }
            })
            .collect();
        out.push_str(&cells.join("  "));
        out.push('\n');
    }
    out
}

pub fn render_json(report: &SimulationReport) -> Result<String> {
    report.summary_json()
}
