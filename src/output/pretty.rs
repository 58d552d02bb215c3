use colored::{ColoredString, Colorize};

use crate::core::Entry;
use crate::features::breathing::{BreathingRun, CueSink, Phase, SessionHistory};
use crate::features::resources::Resource;
use crate::state::AppState;

/// Color a phase name consistently across outputs
pub fn phase_colored(phase: Phase) -> ColoredString {
    let name = phase.display_name().to_uppercase();
    match phase {
        Phase::Inhale => name.cyan().bold(),
        Phase::Hold => name.yellow().bold(),
        Phase::Exhale => name.green().bold(),
    }
}

/// Render a progress bar
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Format a headless breathing run as pretty output
pub fn format_breathing_run_pretty(run: &BreathingRun) -> String {
    let state = &run.final_state;
    let mut output = format!(
        "{} ({} ticks, {})\n",
        "Breathing".bold(),
        run.ticks,
        state.config
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for t in &run.transitions {
        output.push_str(&format!(
            "  {:>4}s  {} → {}\n",
            t.tick,
            phase_colored(t.from),
            phase_colored(t.to)
        ));
    }
    if run.transitions.is_empty() {
        output.push_str(&format!("  {}\n", "No phase changes".dimmed()));
    }

    output.push('\n');
    output.push_str(&format!(
        "  {}: {} {}s {}\n",
        "Now".dimmed(),
        phase_colored(state.phase),
        state.elapsed,
        render_progress_bar(state.progress, 20)
    ));
    output.push_str(&format!("  {}: {}\n", "Cycles".dimmed(), state.cycles));

    if let Some(saved) = &run.saved {
        output.push_str(&format!(
            "  {} {}\n",
            "Session saved:".green(),
            saved.summary()
        ));
    }

    output
}

/// Format saved breathing sessions as pretty output
pub fn format_session_history_pretty(history: &SessionHistory) -> String {
    if history.is_empty() {
        return "Session History (0)\n  No sessions recorded yet.".to_string();
    }

    let mut output = format!("Session History ({})\n", history.len());
    for (i, record) in history.iter().enumerate() {
        output.push_str(&format!(
            "  {}. {}  {}\n",
            i + 1,
            record.summary(),
            record.saved_at_local().format("%H:%M").to_string().dimmed()
        ));
    }
    output
}

/// Format what was logged during an interactive session
///
/// Empty sections are left out; nothing logged gives an empty string.
pub fn format_state_pretty<S: CueSink>(state: &AppState<S>) -> String {
    let mut sections = Vec::new();

    let summary = state.mood_summary();
    if let (Some(average), Some(mood)) = (summary.average, summary.most_common) {
        sections.push(format!(
            "{} ({})  average {average:.1}, mostly {mood}",
            "Moods".bold(),
            summary.count
        ));
    }

    if !state.journal().is_empty() {
        let mut section = format!("{} ({})", "Journal".bold(), state.journal().len());
        for entry in state.journal().entries() {
            section.push_str(&format!(
                "\n  {}  {}",
                entry.display_date().dimmed(),
                entry.text
            ));
        }
        sections.push(section);
    }

    if !state.gratitude().is_empty() {
        let mut section = format!("{} ({})", "Gratitude".bold(), state.gratitude().len());
        for entry in state.gratitude().entries() {
            section.push_str(&format!(
                "\n  {}  {}",
                entry.display_date().dimmed(),
                entry.text
            ));
        }
        sections.push(section);
    }

    if !state.breathing_sessions().is_empty() {
        sections.push(
            format_session_history_pretty(state.breathing_sessions())
                .trim_end()
                .to_string(),
        );
    }

    sections.join("\n\n")
}

/// Format affirmations as pretty output
pub fn format_affirmations_pretty(items: &[&str]) -> String {
    if let [single] = items {
        return format!("\"{}\"", single.italic());
    }

    let mut output = format!("{} ({})\n", "Daily Affirmations".bold(), items.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');
    for item in items {
        output.push_str(&format!("  \"{}\"\n", item.italic()));
    }
    output
}

/// Format resources as pretty output
pub fn format_resources_pretty(resources: &[Resource]) -> String {
    let mut output = format!("{}\n", "Mental Health Resources".bold());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for resource in resources {
        output.push_str(&format!("{}\n", resource.title.bold()));
        output.push_str(&format!("  {}\n", resource.description));
        output.push_str(&format!(
            "  {} {}\n",
            format!("{}:", resource.contact_kind()).dimmed(),
            resource.link.cyan()
        ));
    }
    output
}
