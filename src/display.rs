// Terminal rendering of a statistics record.
// The display surface the widget's records are written to.

use crate::prefs::{Preferences, Theme};
use crate::stats::StatsRecord;
use crate::stats::skills;

const GREEN: &str = "\x1b[32m";
const GRAY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

fn accent(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "\x1b[31m",
        Theme::Light => "\x1b[34m",
    }
}

/// Render a record as terminal text.
///
/// Live records show the exact project count; fallback records show the
/// estimate with a `+` suffix and the failure message.
pub fn render(record: &StatsRecord, prefs: &Preferences) -> String {
    let accent = accent(prefs.theme);
    let mut out = String::new();

    let (projects, source) = if record.is_error {
        (
            format!("{}+", record.total_repos),
            format!("{GRAY}estimated (API unavailable){RESET}"),
        )
    } else {
        (
            record.total_repos.to_string(),
            format!("{GREEN}live from GitHub API{RESET}"),
        )
    };

    out.push_str(&format!("{accent}Projects{RESET}      {projects}  {source}\n"));
    out.push_str(&format!(
        "{accent}Original{RESET}      {}\n",
        record.original_projects
    ));
    out.push_str(&format!(
        "{accent}Forked{RESET}        {}\n",
        record.forked_repos
    ));
    out.push_str(&format!(
        "{accent}Followers{RESET}     {}\n",
        record.followers
    ));
    out.push_str(&format!(
        "{accent}Following{RESET}     {}\n",
        record.following
    ));

    if !prefs.skills.is_empty() {
        out.push_str(&format!(
            "{accent}Technologies{RESET}  {}+\n",
            skills::unique_count(&prefs.skills)
        ));
    }

    if let Some(message) = &record.error_message {
        out.push_str(&format!("{GRAY}{message}{RESET}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_record_shows_exact_count() {
        let mut record = StatsRecord::fallback("unused");
        record.is_error = false;
        record.error_message = None;
        record.total_repos = 12;
        record.original_projects = 9;
        record.forked_repos = 3;

        let out = render(&record, &Preferences::default());

        assert!(out.contains("12"));
        assert!(out.contains("live from GitHub API"));
        assert!(!out.contains("12+"));
    }

    #[test]
    fn fallback_record_shows_estimate() {
        let record = StatsRecord::fallback("GitHub API error: timeout");

        let out = render(&record, &Preferences::default());

        assert!(out.contains("10+"));
        assert!(out.contains("estimated (API unavailable)"));
        assert!(out.contains("GitHub API error: timeout"));
    }

    #[test]
    fn technologies_line_counts_unique_skills() {
        let record = StatsRecord::fallback("err");
        let prefs = Preferences {
            skills: vec![
                "Rust".to_string(),
                "rust".to_string(),
                "Python".to_string(),
            ],
            ..Preferences::default()
        };

        let out = render(&record, &prefs);

        assert!(out.contains("Technologies"));
        assert!(out.contains("2+"));
    }
}
