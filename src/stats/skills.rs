// Technology counting.
// Derives the unique-technology count from a configured skills list.

use std::collections::HashSet;

/// Count unique technology names, ignoring case, surrounding whitespace, and
/// empty entries.
pub fn unique_count<I, S>(items: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    for item in items {
        let name = item.as_ref().trim().to_lowercase();
        if !name.is_empty() {
            seen.insert(name);
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupes_case_insensitively() {
        let skills = ["Rust", "rust", " RUST ", "Python", "Docker"];
        assert_eq!(unique_count(skills), 3);
    }

    #[test]
    fn ignores_blank_entries() {
        let skills = ["Rust", "", "   ", "Python"];
        assert_eq!(unique_count(skills), 2);
    }

    #[test]
    fn empty_list_counts_zero() {
        assert_eq!(unique_count(Vec::<String>::new()), 0);
    }
}
