//! Plain-text rendering of an evaluation

use crate::messages::Messages;
use cmyk_core::{AdapterReport, ComparisonVerdict, Evaluation, Slot};
use std::fmt::Write;

const BAR_CELLS: usize = 10;

/// Ten-cell bar for a 0 to 100 percentage
pub fn bar(percent: u8) -> String {
    let filled = ((percent.min(100) as usize) + 5) / 10;
    let mut out = "█".repeat(filled);
    out.push_str(&"░".repeat(BAR_CELLS - filled));
    out
}

/// Verdict line, or `None` when there is nothing to compare
pub fn verdict_line(verdict: &ComparisonVerdict, msg: &Messages) -> Option<String> {
    if !verdict.is_meaningful() {
        return None;
    }
    Some(if verdict.all_identical {
        msg.all_match(verdict.total_count)
    } else {
        msg.unique_results(verdict.distinct_count, verdict.total_count)
    })
}

/// Full text report
pub fn evaluation(eval: &Evaluation, msg: &Messages) -> String {
    let mut out = String::new();
    let rgb = eval.preview.rgb;
    let _ = writeln!(
        out,
        "{}  {}  RGB({}, {}, {})",
        msg.preview,
        eval.preview.hex.to_uppercase(),
        rgb.r,
        rgb.g,
        rgb.b
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", msg.cmyk_output);

    let mut error_shown = false;
    for report in &eval.cmyk {
        if let Some(block) = adapter(report, msg, &mut error_shown) {
            out.push_str(&block);
        }
    }

    if let Some(line) = verdict_line(&eval.verdict, msg) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{line}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", msg.color_spaces);
    for space in &eval.spaces {
        let channels: Vec<String> = space
            .labels
            .iter()
            .zip(&space.result.values)
            .map(|(label, value)| format!("{label} {value:>9}"))
            .collect();
        let _ = write!(out, "  {:<12} {}", space.name, channels.join("  "));
        if !space.result.css.is_empty() {
            let _ = write!(out, "   {}", space.result.css);
        }
        let _ = writeln!(out);
    }
    out
}

/// One adapter block; a permanent failure is only spelled out once
fn adapter(report: &AdapterReport, msg: &Messages, error_shown: &mut bool) -> Option<String> {
    let d = &report.adapter;
    let header = format!("  {:<20} [{}]", d.title, d.badge);
    match &report.slot {
        Slot::Converted(r) => {
            let channels: Vec<String> = [("C", r.c), ("M", r.m), ("Y", r.y), ("K", r.k)]
                .iter()
                .map(|(label, v)| format!("{label} {v:>3}% {}", bar(*v)))
                .collect();
            Some(format!("{header}\n    {}\n", channels.join("  ")))
        }
        Slot::Failed => Some(format!("{header}  -\n")),
        Slot::Loading => Some(format!("{header}  {}\n", msg.loading_badge)),
        Slot::Unavailable(reason) => {
            if std::mem::replace(error_shown, true) {
                None
            } else {
                Some(format!("{header}  {}: {reason}\n", msg.error_badge))
            }
        }
    }
}
