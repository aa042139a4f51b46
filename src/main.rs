// CLI entry point.
// Fetches GitHub profile statistics for a username and prints them.

mod cache;
mod display;
mod error;
mod github;
mod prefs;
mod stats;

use cache::{CacheEntry, paths, store};
use error::{Result, StatsError};
use github::GitHubClient;
use prefs::Preferences;
use stats::{StatsRecord, StatsWidget};

/// Parsed command line options.
#[derive(Debug, Default, PartialEq)]
struct Options {
    username: String,
    refresh: bool,
    json: bool,
    toggle_theme: bool,
}

impl Options {
    const USAGE: &'static str =
        "usage: repostats <username> [--refresh] [--json] [--toggle-theme]";

    fn parse(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut options = Options::default();

        for arg in args {
            match arg.as_str() {
                "--refresh" | "-r" => options.refresh = true,
                "--json" => options.json = true,
                "--toggle-theme" => options.toggle_theme = true,
                flag if flag.starts_with('-') => {
                    return Err(StatsError::Other(format!(
                        "unknown flag {flag}\n{}",
                        Self::USAGE
                    )));
                }
                name if options.username.is_empty() => options.username = name.to_string(),
                extra => {
                    return Err(StatsError::Other(format!(
                        "unexpected argument {extra}\n{}",
                        Self::USAGE
                    )));
                }
            }
        }

        if options.username.is_empty() {
            return Err(StatsError::Other(Self::USAGE.to_string()));
        }

        Ok(options)
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let options = Options::parse(std::env::args().skip(1))?;

    let mut prefs = Preferences::load();
    if options.toggle_theme {
        prefs.theme = prefs.theme.toggle();
        prefs.save()?;
    }

    let client = GitHubClient::new()?;
    let widget = StatsWidget::new(options.username, client);
    let snapshot_path = paths::stats_path(widget.username());

    if options.refresh {
        // A manual refresh also discards the on-disk snapshot.
        if let Some(path) = &snapshot_path {
            store::delete(path)?;
        }
    } else if let Some(entry) = snapshot_path.as_ref().and_then(|path| {
        store::read_json::<CacheEntry<StatsRecord>>(path)
            .ok()
            .flatten()
    }) {
        widget.prime(entry).await;
    }

    let served_from_snapshot = !options.refresh && widget.is_cache_valid().await;

    let record = if options.refresh {
        widget.force_refresh().await
    } else {
        widget.get_statistics(false).await
    };

    // A fresh snapshot needs no rewrite; everything else does.
    if !served_from_snapshot {
        if let (Some(path), Some(entry)) = (&snapshot_path, widget.cache_entry().await) {
            store::write_json(path, &entry)?;
        }
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", display::render(&record, &prefs));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options> {
        Options::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_username_and_flags() {
        let options = parse(&["romc57", "--refresh", "--json"]).unwrap();

        assert_eq!(options.username, "romc57");
        assert!(options.refresh);
        assert!(options.json);
        assert!(!options.toggle_theme);
    }

    #[test]
    fn rejects_missing_username() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--refresh"]).is_err());
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(parse(&["romc57", "--frobnicate"]).is_err());
    }

    #[test]
    fn rejects_extra_positional() {
        assert!(parse(&["romc57", "other"]).is_err());
    }
}
