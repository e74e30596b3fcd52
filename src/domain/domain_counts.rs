use serde::Serialize;

use std::collections::HashMap;

/// One row of the sorted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainCount<'a> {
    pub domain: &'a str,
    pub number_of_customers: u64,
}

/// Number of customers per email domain.
///
/// Entries are only ever added or incremented, so every stored count is at least 1.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DomainCounts {
    map: HashMap<String, u64>,
}

impl DomainCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one customer to `domain`, inserting it with a count of 1 if absent.
    pub fn increment(&mut self, domain: &str) {
        // only allocate the key the first time a domain shows up
        if let Some(count) = self.map.get_mut(domain) {
            *count += 1;
        } else {
            self.map.insert(domain.to_owned(), 1);
        }
    }

    pub fn get(&self, domain: &str) -> Option<u64> {
        self.map.get(domain).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns every (domain, count) pair ordered by byte-wise ascending domain.
    pub fn sorted_entries(&self) -> Vec<DomainCount<'_>> {
        let mut entries: Vec<_> = self
            .map
            .iter()
            .map(|(domain, count)| DomainCount {
                domain,
                number_of_customers: *count,
            })
            .collect();
        entries.sort_unstable_by(|a, b| a.domain.cmp(b.domain));
        entries
    }

    /// Builds counts by incrementing each domain `count` times.
    #[cfg(test)]
    pub(crate) fn from_counts(entries: &[(&str, u64)]) -> Self {
        let mut counts = Self::new();
        for &(domain, count) in entries {
            for _ in 0..count {
                counts.increment(domain);
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_inserts_then_adds() {
        let mut counts = DomainCounts::new();
        assert!(counts.is_empty());

        counts.increment("example.com");
        assert_eq!(counts.get("example.com"), Some(1));

        counts.increment("example.com");
        counts.increment("other.org");
        assert_eq!(counts.get("example.com"), Some(2));
        assert_eq!(counts.get("other.org"), Some(1));
        assert_eq!(counts.get("missing.net"), None);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_domains_are_case_sensitive() {
        let mut counts = DomainCounts::new();
        counts.increment("Example.com");
        counts.increment("example.com");

        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_sorted_entries_are_bytewise_ascending() {
        let mut counts = DomainCounts::new();
        for domain in ["yandex.ru", "b.com", "B.com", "a.com", "yandex.ru", "ab.com"] {
            counts.increment(domain);
        }

        let sorted = counts.sorted_entries();
        let domains: Vec<_> = sorted.iter().map(|x| x.domain).collect();
        assert_eq!(domains, ["B.com", "a.com", "ab.com", "b.com", "yandex.ru"]);
        assert_eq!(sorted.last().unwrap().number_of_customers, 2);
    }

    #[test]
    fn test_sorted_entries_is_repeatable() {
        let counts = DomainCounts::from_counts(&[("c.io", 3), ("a.io", 1), ("b.io", 2)]);

        assert_eq!(counts.sorted_entries(), counts.sorted_entries());
        assert_eq!(
            counts.sorted_entries()[0],
            DomainCount {
                domain: "a.io",
                number_of_customers: 1
            }
        );
    }
}
