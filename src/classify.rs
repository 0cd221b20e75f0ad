// src/classify.rs
//! Practice-area classification.
//!
//! A document qualifies when it is long enough and one of the configured hero
//! phrases appears in its lowercased header window. Rules are tried in table
//! order and the first matching rule wins, so precedence is purely a matter of
//! how `CorpusConfig::rules` is ordered.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{AreaRule, CorpusConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PracticeArea {
    #[serde(rename = "M_and_A")]
    MergersAndAcquisitions,
    #[serde(rename = "Funds")]
    Funds,
    #[serde(rename = "LevFin")]
    LeveragedFinance,
}

impl PracticeArea {
    pub const ALL: [PracticeArea; 3] = [
        PracticeArea::MergersAndAcquisitions,
        PracticeArea::Funds,
        PracticeArea::LeveragedFinance,
    ];

    /// Directory/config key, e.g. `LevFin` in `LevFin_3`.
    pub fn key(&self) -> &'static str {
        match self {
            PracticeArea::MergersAndAcquisitions => "M_and_A",
            PracticeArea::Funds => "Funds",
            PracticeArea::LeveragedFinance => "LevFin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PracticeArea::MergersAndAcquisitions => "M&A",
            PracticeArea::Funds => "Funds",
            PracticeArea::LeveragedFinance => "LevFin",
        }
    }
}

impl fmt::Display for PracticeArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub area: PracticeArea,
    /// The hero phrase that matched, as written in the rule table.
    pub hero: String,
}

pub struct Classifier {
    min_len: usize,
    window: usize,
    rules: Vec<CompiledRule>,
}

struct CompiledRule {
    area: PracticeArea,
    // (as configured, lowercased)
    phrases: Vec<(String, String)>,
    context: Option<Vec<String>>,
}

impl CompiledRule {
    fn from_rule(rule: &AreaRule) -> Self {
        Self {
            area: rule.area,
            phrases: rule.phrases.iter().map(|p| (p.clone(), p.to_lowercase())).collect(),
            context: rule
                .context_keywords
                .as_ref()
                .map(|kws| kws.iter().map(|k| k.to_lowercase()).collect()),
        }
    }

    fn matches(&self, header: &str) -> Option<&str> {
        // Phrase first, then the context gate; a miss on the gate rejects the
        // whole rule since the context check doesn't depend on the phrase.
        let (hero, _) = self.phrases.iter().find(|(_, lc)| header.contains(lc.as_str()))?;
        if let Some(context) = &self.context {
            if !context.iter().any(|kw| header.contains(kw.as_str())) {
                return None;
            }
        }
        Some(hero.as_str())
    }
}

impl Classifier {
    pub fn new(cfg: &CorpusConfig) -> Self {
        Self {
            min_len: cfg.min_doc_length,
            window: cfg.header_window,
            rules: cfg.rules.iter().map(CompiledRule::from_rule).collect(),
        }
    }

    /// `None` means the document is discarded outright.
    pub fn classify(&self, text: &str) -> Option<Classification> {
        if char_len_below(text, self.min_len) {
            return None;
        }
        let header = header_window(text, self.window);
        self.rules.iter().find_map(|rule| {
            rule.matches(&header).map(|hero| Classification { area: rule.area, hero: s!(hero) })
        })
    }
}

/// First `chars` characters of `text`, lowercased.
pub fn header_window(text: &str, chars: usize) -> String {
    let end = text.char_indices().nth(chars).map(|(i, _)| i).unwrap_or(text.len());
    text[..end].to_lowercase()
}

/// True when `text` has fewer than `min` characters. Stops counting at `min`.
pub fn char_len_below(text: &str, min: usize) -> bool {
    min > 0 && text.chars().nth(min - 1).is_none()
}
