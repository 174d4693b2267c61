//! Batch filtering: block-list and queries in, one verdict per query out.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::checker::DomainChecker;
use crate::error::Result;
use crate::parser::parse_batch;
use crate::types::{Batch, Verdict};

/// Compute verdicts for every query in `batch`, in input order.
pub fn check_batch(batch: &Batch) -> Vec<Verdict> {
    let checker = DomainChecker::new(batch.forbidden.iter().cloned());
    batch.queries.iter().map(|q| checker.verdict(q)).collect()
}

/// Read a batch from `reader` and write one `Bad`/`Good` line per query.
///
/// Input errors abort the run before anything is written.
pub fn run<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<()> {
    let batch = parse_batch(reader)?;
    let verdicts = check_batch(&batch);

    let bad = verdicts.iter().filter(|v| v.is_bad()).count();
    debug!(queries = verdicts.len(), bad, "checked batch");

    for verdict in verdicts {
        writeln!(writer, "{}", verdict)?;
    }
    writer.flush()?;
    Ok(())
}
