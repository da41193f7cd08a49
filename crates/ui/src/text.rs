//! Plain-text rendering of a `DashboardVm`, for terminals and logs.

use std::fmt::Write;

use crate::vm::DashboardVm;

const BAR_WIDTH: usize = 20;

fn bar(percent: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// One block per day: heading, bar, then the task rows.
#[must_use]
pub fn render_text(vm: &DashboardVm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", vm.title);
    let _ = writeln!(out, "{}", vm.summary_label);

    if vm.cards.is_empty() {
        let _ = writeln!(out, "\n{}", vm.empty_label);
        return out;
    }

    for card in &vm.cards {
        let marker = if card.is_today { "▶ " } else { "" };
        let _ = writeln!(out);
        let _ = writeln!(out, "{marker}{}  ({})", card.heading, card.date);
        let _ = writeln!(out, "  {} {}", bar(card.percent), card.percent_label);
        for row in &card.tasks {
            let _ = writeln!(
                out,
                "  {:>2}. {:<40} {:>6}  {}",
                row.index, row.name, row.hours_label, row.control_label
            );
        }
    }
    out
}
