//! Domain Checker - flags domains that equal or sit under a block-list entry
//!
//! This library provides:
//! - A [`Domain`] type with a label-wise "is subdomain of" predicate
//! - A [`DomainChecker`] index that collapses nested block-list entries and
//!   answers membership queries in logarithmic time
//! - A line-oriented batch runner used by the `domain-checker` binary
//!
//! # Example
//!
//! ```rust
//! use domain_checker::{Domain, DomainChecker};
//!
//! let checker: DomainChecker = ["ya.ru", "maps.me", "m.ya.ru", "com"]
//!     .into_iter()
//!     .map(Domain::from)
//!     .collect();
//!
//! // "m.ya.ru" is covered by "ya.ru"
//! assert_eq!(checker.len(), 3);
//!
//! assert!(checker.is_forbidden(&Domain::new("ya.ru")));
//! assert!(checker.is_forbidden(&Domain::new("maps.com")));
//! assert!(!checker.is_forbidden(&Domain::new("alisa.ru")));
//! ```
//!
//! # Batch Format
//!
//! ```text
//! N
//! <N block-list domains, one per line>
//! M
//! <M query domains, one per line>
//! ```
//!
//! Output is `M` lines, each `Bad` (forbidden) or `Good`, in query order.

pub mod batch;
pub mod checker;
pub mod domain;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use batch::{check_batch, run};
pub use checker::DomainChecker;
pub use domain::Domain;
pub use error::{CheckerError, InputErrorKind, Result};
pub use parser::{parse_batch, InputReader};
pub use types::{Batch, Verdict};
