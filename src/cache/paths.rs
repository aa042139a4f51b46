// Cache path utilities.
// Constructs filesystem locations for stats snapshots and preferences.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "repostats")
}

/// Get the base cache directory (~/.cache/repostats on macOS/Linux).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to a user's cached stats snapshot.
pub fn stats_path(username: &str) -> Option<PathBuf> {
    cache_dir().map(|dir| {
        dir.join("users")
            .join(sanitize_name(username))
            .join("stats.json")
    })
}

/// Path to the preferences file in the config directory.
pub fn prefs_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("prefs.json"))
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("simple"), "simple");
        assert_eq!(sanitize_name("with/slash"), "with_slash");
        assert_eq!(sanitize_name("user:name"), "user_name");
    }

    #[test]
    fn test_snapshot_path() {
        // Verifies path construction, not actual filesystem
        let path = stats_path("romc57").unwrap();
        assert!(path.ends_with("users/romc57/stats.json"));

        let odd = stats_path("a/b").unwrap();
        assert!(odd.ends_with("users/a_b/stats.json"));
    }

    #[test]
    fn test_prefs_path() {
        let path = prefs_path().unwrap();
        assert!(path.ends_with("prefs.json"));
    }
}
