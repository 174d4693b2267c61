//! Domain names stored root label first.
//!
//! `"maps.yandex.ru"` is kept as `["ru", "yandex", "maps"]`. Under this
//! layout a parent domain is a label-wise prefix of each of its descendants,
//! and lexicographic order over the labels places every ancestor directly
//! before the block of names nested under it.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Label separator
const SEPARATOR: char = '.';

/// A dotted domain name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Domain {
    /// Labels from the root (rightmost) label down
    labels: Vec<String>,
}

impl Domain {
    /// Create a domain from its dotted form, e.g. `"yandex.ru"`.
    ///
    /// A single trailing separator is ignored, so `"yandex.ru."` is the same
    /// domain. No label validation or case folding is performed.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.strip_suffix(SEPARATOR).unwrap_or(raw);
        Self {
            labels: trimmed.rsplit(SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Check if this domain equals `ancestor` or is nested under it.
    pub fn is_subdomain_of(&self, ancestor: &Domain) -> bool {
        self.labels.starts_with(&ancestor.labels)
    }

    /// Labels from the root label down
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels
    pub fn depth(&self) -> usize {
        self.labels.len()
    }

    /// Reversed form used for ordering, e.g. `"ru.yandex"`.
    pub fn render(&self) -> String {
        self.labels.join(".")
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

impl From<&str> for Domain {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Domain {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl FromStr for Domain {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_reversed() {
        let d = Domain::new("maps.yandex.ru");
        assert_eq!(d.labels(), ["ru", "yandex", "maps"]);
        assert_eq!(d.depth(), 3);
        assert_eq!(d.render(), "ru.yandex.maps");
        assert_eq!(d.to_string(), "maps.yandex.ru");
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(Domain::new("example.com"), Domain::new("example.com."));
        assert!(Domain::new("example.com.").is_subdomain_of(&Domain::new("example.com")));
        assert!(Domain::new("example.com").is_subdomain_of(&Domain::new("example.com.")));
    }

    #[test]
    fn test_subdomain() {
        let parent = Domain::new("example.com");
        assert!(Domain::new("a.example.com").is_subdomain_of(&parent));
        assert!(Domain::new("x.y.example.com").is_subdomain_of(&parent));
        assert!(!parent.is_subdomain_of(&Domain::new("a.example.com")));
    }

    #[test]
    fn test_reflexive() {
        for raw in ["com", "ya.ru", "m.ya.ru", ""] {
            let d = Domain::new(raw);
            assert!(d.is_subdomain_of(&d), "{raw:?} should contain itself");
        }
    }

    #[test]
    fn test_label_boundary() {
        let parent = Domain::new("example.com");
        assert!(!Domain::new("notexample.com").is_subdomain_of(&parent));
        assert!(!Domain::new("example.community").is_subdomain_of(&parent));
        assert!(Domain::new("notmaps.com").is_subdomain_of(&Domain::new("com")));
    }

    #[test]
    fn test_no_case_folding() {
        assert_ne!(Domain::new("Example.com"), Domain::new("example.com"));
        assert!(!Domain::new("a.EXAMPLE.com").is_subdomain_of(&Domain::new("example.com")));
    }

    #[test]
    fn test_empty_and_root() {
        assert_eq!(Domain::new(""), Domain::new("."));
        assert_eq!(Domain::new("").labels(), [""]);
        assert!(!Domain::new("example.com").is_subdomain_of(&Domain::new("")));
    }

    #[test]
    fn test_ancestor_sorts_first() {
        let mut domains: Vec<Domain> = ["m.ya.ru", "ya.ru", "yb.ru", "a.ya.ru"]
            .into_iter()
            .map(Domain::from)
            .collect();
        domains.sort();
        let rendered: Vec<String> = domains.iter().map(Domain::to_string).collect();
        assert_eq!(rendered, ["ya.ru", "a.ya.ru", "m.ya.ru", "yb.ru"]);
    }

    #[test]
    fn test_from_str() {
        let d: Domain = "yandex.ru".parse().unwrap();
        assert_eq!(d, Domain::from(String::from("yandex.ru")));
    }
}
