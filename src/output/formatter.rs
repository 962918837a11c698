use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::config::ColorChoice;
use crate::scoring::{
    BonusKind, ScoreBreakdown, StepTable, SUBTOTAL_CAP, TEACHING_HOURS_TABLE,
    TRAINING_HOURS_TABLE,
};

/// Width of the label column in the text report
const LABEL_WIDTH: usize = 27;

/// Decide whether to colorize, honoring an explicit choice and otherwise
/// checking if stdout is a TTY
pub fn should_use_colors(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal(),
    }
}

/// Format points with one decimal place ("22.0", "29.5")
pub fn format_points(points: f64) -> String {
    format!("{:.1}", points)
}

fn category_line(label: &str, score: f64, max: f64, use_colors: bool) -> String {
    let label = format!("{:<width$}", format!("{}:", label), width = LABEL_WIDTH);
    let points = format_points(score);
    let max = format!("/ {}", max);
    if use_colors {
        format!("{}{} {}", label, points.bold(), max.dimmed())
    } else {
        format!("{}{} {}", label, points, max)
    }
}

/// Format a breakdown as the multi-line result report.
///
/// The subtotal is shown out of 100 and the bonus separately. A note follows
/// when the final total exceeds 100, and a warning when life guidance was
/// left unanswered.
pub fn format_breakdown(breakdown: &ScoreBreakdown, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let mut teaching = category_line("Teaching", breakdown.teaching_score, 30.0, use_colors);
    teaching.push_str(&format!(
        "  ({:.1} weighted hours)",
        breakdown.weighted_teaching_hours
    ));
    lines.push(teaching);
    lines.push(category_line(
        "Life guidance",
        breakdown.life_guidance_score,
        30.0,
        use_colors,
    ));
    lines.push(category_line("Duty", breakdown.duty_score, 30.0, use_colors));
    lines.push(category_line(
        "Professional development",
        breakdown.professional_development_score,
        10.0,
        use_colors,
    ));
    lines.push(category_line(
        "Subtotal (without bonus)",
        breakdown.subtotal,
        SUBTOTAL_CAP,
        use_colors,
    ));

    let bonus_label = format!("{:<width$}", "Bonus:", width = LABEL_WIDTH);
    lines.push(format!("{}{}", bonus_label, format_points(breakdown.bonus_score)));

    let final_label = format!("{:<width$}", "Final score:", width = LABEL_WIDTH);
    let final_points = format_points(breakdown.final_total);
    if use_colors {
        lines.push(format!(
            "{}{} (bonus included)",
            final_label,
            final_points.green().bold()
        ));
    } else {
        lines.push(format!("{}{} (bonus included)", final_label, final_points));
    }

    if breakdown.over_cap {
        let note = "Note: bonus points pushed the total above 100.";
        if use_colors {
            lines.push(note.cyan().to_string());
        } else {
            lines.push(note.to_string());
        }
    }

    if breakdown.incomplete {
        let warning =
            "Warning: no life-guidance answer was selected, so life guidance scored 0. Check your answers.";
        if use_colors {
            lines.push(warning.yellow().to_string());
        } else {
            lines.push(warning.to_string());
        }
    }

    lines.join("\n")
}

/// Per-category detail lines for verbose output
pub fn format_factors(breakdown: &ScoreBreakdown) -> String {
    breakdown
        .factors
        .iter()
        .map(|factor| {
            let points = match factor.max {
                Some(max) => format!("{} / {}", format_points(factor.score), max),
                None => format_points(factor.score),
            };
            format!("  {}: {} ({})", factor.label, points, factor.description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the breakdown as pretty-printed JSON
pub fn format_json(breakdown: &ScoreBreakdown) -> serde_json::Result<String> {
    serde_json::to_string_pretty(breakdown)
}

/// Format the breakdown as one tab-separated line for scripting.
/// Columns: teaching, life guidance, duty, professional development, bonus,
/// subtotal, final total, flags (no headers, no colors)
pub fn format_tsv(breakdown: &ScoreBreakdown) -> String {
    let mut flags = Vec::new();
    if breakdown.over_cap {
        flags.push("over_cap");
    }
    if breakdown.incomplete {
        flags.push("incomplete");
    }
    let flags = if flags.is_empty() {
        "-".to_string()
    } else {
        flags.join(",")
    };

    [
        breakdown.teaching_score,
        breakdown.life_guidance_score,
        breakdown.duty_score,
        breakdown.professional_development_score,
        breakdown.bonus_score,
        breakdown.subtotal,
        breakdown.final_total,
    ]
    .iter()
    .map(|points| format_points(*points))
    .chain(std::iter::once(flags))
    .collect::<Vec<_>>()
    .join("\t")
}

fn format_table(title: &str, unit: &str, table: &StepTable) -> String {
    let mut lines = vec![title.to_string()];
    for step in table.steps() {
        lines.push(format!(
            "  >= {:>5} {}  ->  {}",
            format_points(step.min),
            unit,
            format_points(step.score)
        ));
    }
    lines.push(format!(
        "  below {} {}  ->  {}",
        format_points(table.steps().last().map(|s| s.min).unwrap_or(0.0)),
        unit,
        format_points(table.floor())
    ));
    lines.join("\n")
}

/// Lookup tables and bonus weights as plain text
pub fn format_tables() -> String {
    let mut sections = vec![
        format_table(
            "Teaching (weighted weekly hours)",
            "h",
            &TEACHING_HOURS_TABLE,
        ),
        format_table(
            "Professional development (training hours)",
            "h",
            &TRAINING_HOURS_TABLE,
        ),
    ];

    let mut bonus = vec!["Bonus (uncapped)".to_string()];
    for kind in BonusKind::ALL {
        bonus.push(format!("  +{}  {}", format_points(kind.weight()), kind.label()));
    }
    sections.push(bonus.join("\n"));

    sections.join("\n\n")
}
