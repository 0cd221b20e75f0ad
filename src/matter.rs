// src/matter.rs
//! Bounded grouping of classified documents into matters.
//!
//! Each practice area has one open matter at a time. Documents are appended
//! until the matter holds `docs_per_matter` entries, at which point it closes
//! and is handed back to the caller for saving. An area stops accepting
//! documents once it has `target_matters` closed matters.

use std::collections::BTreeMap;

use crate::classify::PracticeArea;
use crate::config::CorpusConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatterEntry {
    pub text: String,
    /// `None` for ancillary entries.
    pub hero: Option<String>,
}

/// A closed matter. Immutable once returned by the aggregator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matter {
    pub area: PracticeArea,
    /// 1-based.
    pub index: usize,
    pub entries: Vec<MatterEntry>,
}

impl Matter {
    /// `LevFin_2` style directory name.
    pub fn dir_name(&self) -> String {
        matter_dir_name(self.area, self.index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn matter_dir_name(area: PracticeArea, index: usize) -> String {
    format!("{}_{}", area.key(), index)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AreaState {
    pub completed: usize,
    /// Buffer of the open matter, whose index is `completed + 1`.
    pub open: Vec<MatterEntry>,
}

/// Per-run aggregation state. Created at run start, dropped at run end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregatorState {
    areas: BTreeMap<PracticeArea, AreaState>,
}

impl AggregatorState {
    pub fn new(areas: &[PracticeArea]) -> Self {
        Self { areas: areas.iter().map(|a| (*a, AreaState::default())).collect() }
    }

    pub fn area(&self, area: PracticeArea) -> Option<&AreaState> {
        self.areas.get(&area)
    }

    /// Completed-matter count per area, in area order.
    pub fn tallies(&self) -> Vec<(PracticeArea, usize)> {
        self.areas.iter().map(|(a, st)| (*a, st.completed)).collect()
    }
}

pub struct MatterAggregator {
    target_matters: usize,
    docs_per_matter: usize,
    state: AggregatorState,
}

impl MatterAggregator {
    pub fn new(cfg: &CorpusConfig) -> Self {
        Self::with_targets(&cfg.areas(), cfg.target_matters, cfg.docs_per_matter)
    }

    pub fn with_targets(areas: &[PracticeArea], target_matters: usize, docs_per_matter: usize) -> Self {
        Self {
            target_matters,
            docs_per_matter: docs_per_matter.max(1),
            state: AggregatorState::new(areas),
        }
    }

    pub fn state(&self) -> &AggregatorState {
        &self.state
    }

    pub fn completed(&self, area: PracticeArea) -> usize {
        self.state.area(area).map_or(0, |st| st.completed)
    }

    pub fn open_len(&self, area: PracticeArea) -> usize {
        self.state.area(area).map_or(0, |st| st.open.len())
    }

    /// Index the next accepted document for `area` would land in, or `None`
    /// when the area is full (or unknown).
    pub fn current_index(&self, area: PracticeArea) -> Option<usize> {
        let st = self.state.area(area)?;
        (st.completed < self.target_matters).then_some(st.completed + 1)
    }

    /// Offer one classified document. Returns the matter it completed, if any.
    /// Documents for a full area are dropped.
    pub fn offer(&mut self, area: PracticeArea, hero: Option<String>, text: String) -> Option<Matter> {
        let target = self.target_matters;
        let per = self.docs_per_matter;
        let st = self.state.areas.get_mut(&area)?;
        if st.completed >= target {
            return None;
        }

        st.open.push(MatterEntry { text, hero });
        if st.open.len() < per {
            return None;
        }

        let index = st.completed + 1;
        st.completed += 1;
        Some(Matter { area, index, entries: std::mem::take(&mut st.open) })
    }

    /// Every area has reached its matter target.
    pub fn is_done(&self) -> bool {
        self.state.areas.values().all(|st| st.completed >= self.target_matters)
    }

    /// Close every non-empty open matter as a partial matter.
    pub fn finish(&mut self) -> Vec<Matter> {
        let mut out = Vec::new();
        for (area, st) in self.state.areas.iter_mut() {
            if st.open.is_empty() {
                continue;
            }
            let index = st.completed + 1;
            st.completed = index;
            out.push(Matter { area: *area, index, entries: std::mem::take(&mut st.open) });
        }
        out
    }
}
