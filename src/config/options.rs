// src/config/options.rs
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::classify::PracticeArea;
use crate::error::{CorpusError, Result};

/// One row of the classification table. Rows are tried in the order they
/// appear in `CorpusConfig::rules`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaRule {
    pub area: PracticeArea,
    pub phrases: Vec<String>,
    /// When set, a phrase hit only counts if one of these also appears in
    /// the header window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_keywords: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroName {
    pub phrase: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncillaryMarker {
    pub marker: String,
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub min_doc_length: usize,
    pub header_window: usize,
    pub label_window: usize,
    pub target_matters: usize,
    pub docs_per_matter: usize,
    pub progress_every: u64,
    pub rules: Vec<AreaRule>,
    pub hero_names: Vec<HeroName>,
    pub ancillary_markers: Vec<AncillaryMarker>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            min_doc_length: MIN_DOC_LENGTH,
            header_window: HEADER_WINDOW,
            label_window: LABEL_WINDOW,
            target_matters: TARGET_MATTERS,
            docs_per_matter: DOCS_PER_MATTER,
            progress_every: PROGRESS_EVERY,
            rules: default_rules(),
            hero_names: HERO_NAMES
                .iter()
                .map(|(phrase, label)| HeroName { phrase: s!(*phrase), label: s!(*label) })
                .collect(),
            ancillary_markers: ANCILLARY_MARKERS
                .iter()
                .map(|(marker, kind)| AncillaryMarker { marker: s!(*marker), kind: s!(*kind) })
                .collect(),
        }
    }
}

/// Funds → LevFin → M&A. Funds goes first because its phrases are the
/// ones most likely to show up inside a credit or merger header.
fn default_rules() -> Vec<AreaRule> {
    vec![
        AreaRule {
            area: PracticeArea::Funds,
            phrases: owned(FUNDS_PHRASES),
            context_keywords: Some(owned(FUNDS_CONTEXT)),
        },
        AreaRule {
            area: PracticeArea::LeveragedFinance,
            phrases: owned(LEVFIN_PHRASES),
            context_keywords: None,
        },
        AreaRule {
            area: PracticeArea::MergersAndAcquisitions,
            phrases: owned(M_AND_A_PHRASES),
            context_keywords: None,
        },
    ]
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl CorpusConfig {
    /// Read a TOML file. Missing fields fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
        let cfg: CorpusConfig = toml::from_str(&text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_doc_length == 0 || self.header_window == 0 || self.label_window == 0 {
            return Err(CorpusError::Config(s!("lengths and windows must be non-zero")));
        }
        if self.target_matters == 0 {
            return Err(CorpusError::Config(s!("target_matters must be at least 1")));
        }
        if self.docs_per_matter == 0 {
            return Err(CorpusError::Config(s!("docs_per_matter must be at least 1")));
        }
        if self.rules.is_empty() {
            return Err(CorpusError::Config(s!("at least one practice area rule is required")));
        }

        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.area) {
                return Err(CorpusError::Config(format!("{} listed more than once", rule.area.key())));
            }
            if rule.phrases.is_empty() {
                return Err(CorpusError::Config(format!("{} has no hero phrases", rule.area.key())));
            }
            if rule.phrases.iter().any(|p| is_blank(p)) {
                return Err(CorpusError::Config(format!("{} has an empty hero phrase", rule.area.key())));
            }
            if let Some(kws) = &rule.context_keywords {
                // an empty gate can never pass, a blank keyword always does
                if kws.is_empty() || kws.iter().any(|k| is_blank(k)) {
                    return Err(CorpusError::Config(format!(
                        "{} context_keywords must be non-empty strings",
                        rule.area.key()
                    )));
                }
            }
        }

        if self.hero_names.iter().any(|h| is_blank(&h.phrase) || is_blank(&h.label)) {
            return Err(CorpusError::Config(s!("hero_names entries need a phrase and a label")));
        }
        if self.ancillary_markers.iter().any(|m| is_blank(&m.marker) || is_blank(&m.kind)) {
            return Err(CorpusError::Config(s!("ancillary_markers entries need a marker and a kind")));
        }
        Ok(())
    }

    /// Areas in precedence order.
    pub fn areas(&self) -> Vec<PracticeArea> {
        self.rules.iter().map(|r| r.area).collect()
    }
}
