//! Merging match results into the per-substance records.

use tracing::{debug, info_span};

use edscreen_map::{CandidateKeys, MatchOutcome, RowMatch, find_first_match};
use edscreen_model::{Presence, Record, SourceKind, Substance};

use crate::run_log::{RunEvent, RunLog};
use crate::sources::RunSource;

/// Owns the records of a run and is their only writer during enrichment.
#[derive(Debug, Clone)]
pub struct RecordMerger {
    records: Vec<Record>,
}

impl RecordMerger {
    /// Creates one record per substance, identity columns filled in.
    pub fn new(substances: &[Substance]) -> Self {
        Self {
            records: substances.iter().map(Record::new).collect(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Matches every record against every source.
    ///
    /// Records are processed in input order. The identity source is applied
    /// first so an EC number it backfills is a candidate key for the others;
    /// the remaining sources follow in the order given.
    pub fn enrich(&mut self, sources: &[RunSource], log: &mut RunLog) {
        let span = info_span!("enrich", substances = self.records.len());
        let _guard = span.enter();

        let ordered: Vec<&RunSource> = sources
            .iter()
            .filter(|source| source.kind().is_identity())
            .chain(sources.iter().filter(|source| !source.kind().is_identity()))
            .collect();

        let total = self.records.len();
        for (position, record) in self.records.iter_mut().enumerate() {
            let mut matched = 0;
            for source in &ordered {
                if merge_source(record, source) {
                    matched += 1;
                }
            }
            log.record(RunEvent::SubstanceProcessed {
                index: position + 1,
                total,
                cas: record.input.clone(),
                matched,
            });
        }
    }
}

/// Applies one source to one record. Returns whether the source matched.
///
/// Absent and failed sources leave the namespace untouched.
pub fn merge_source(record: &mut Record, source: &RunSource) -> bool {
    let Some(table) = source.load.table() else {
        return false;
    };
    let keys = CandidateKeys::from_record(record);
    match find_first_match(table, &keys, &source.layout) {
        MatchOutcome::Matched(found) => {
            debug!(
                source = %source.kind(),
                cas = %record.input,
                row = found.row + 1,
                "match"
            );
            apply_match(record, source.kind(), found);
            true
        }
        MatchOutcome::NoMatch => {
            record
                .namespace_mut(source.kind())
                .set_presence(Presence::No);
            false
        }
    }
}

fn apply_match(record: &mut Record, kind: SourceKind, found: RowMatch) {
    let namespace = record.namespace_mut(kind);
    namespace.set_presence(Presence::Yes);
    for (field, value) in namespace.details_mut().into_iter().zip(found.values) {
        *field = value;
    }
    if kind.is_identity()
        && !record.ec.is_set()
        && let Some(ec) = record.clp.ec_number.non_empty()
    {
        record.ec.set(ec.to_string());
    }
}
