//! Block-list index.
//!
//! Entries are sorted and collapsed into an antichain: no retained entry is
//! equal to or nested under another. Membership is then a single floor
//! lookup, since the nearest ancestor of a query in the list (if any) is the
//! largest retained entry not greater than the query.

use tracing::{debug, trace};

use crate::domain::Domain;
use crate::types::Verdict;

/// Sorted, pairwise non-nesting set of forbidden domains
#[derive(Debug, Clone, Default)]
pub struct DomainChecker {
    domains: Vec<Domain>,
}

impl DomainChecker {
    /// Build a checker from block-list entries.
    ///
    /// Entries subsumed by another entry (duplicates and subdomains of a
    /// listed parent) are dropped.
    pub fn new(entries: impl IntoIterator<Item = Domain>) -> Self {
        let mut domains: Vec<Domain> = entries.into_iter().collect();
        let total = domains.len();

        domains.sort();
        // `dedup_by` passes (current, last retained)
        domains.dedup_by(|current, retained| current.is_subdomain_of(retained));

        debug!(
            entries = total,
            retained = domains.len(),
            "built domain checker"
        );

        Self { domains }
    }

    /// Check if `domain` equals or is nested under a block-list entry.
    pub fn is_forbidden(&self, domain: &Domain) -> bool {
        // upper_bound: first entry strictly greater than the query
        let upper = self.domains.partition_point(|d| d <= domain);

        if upper > 0 {
            let floor = &self.domains[upper - 1];
            if floor == domain || domain.is_subdomain_of(floor) {
                trace!(%domain, entry = %floor, "forbidden");
                return true;
            }
        }

        // Single-entry lists are checked against their only entry no matter
        // where the query falls.
        if let [only] = self.domains.as_slice() {
            if only == domain || domain.is_subdomain_of(only) {
                trace!(%domain, entry = %only, "forbidden");
                return true;
            }
        }

        false
    }

    /// Verdict for a single query
    pub fn verdict(&self, domain: &Domain) -> Verdict {
        Verdict::from_forbidden(self.is_forbidden(domain))
    }

    /// Retained entries, sorted
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Check if no entries are retained
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl FromIterator<Domain> for DomainChecker {
    fn from_iter<I: IntoIterator<Item = Domain>>(iter: I) -> Self {
        Self::new(iter)
    }
}
