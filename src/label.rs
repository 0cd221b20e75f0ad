// src/label.rs
// File labels for documents of a closed matter.
//
// Hero entries use their canonical name; everything else is named after the
// first ancillary marker found near the top of the text, or falls back to a
// numbered generic label. The numbered forms always embed the entry index.

use std::collections::HashMap;

use crate::classify::header_window;
use crate::config::CorpusConfig;
use crate::matter::{Matter, MatterEntry};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocLabel {
    /// File stem, no extension.
    pub stem: String,
    /// Position of the entry in its matter (0-based).
    pub index: usize,
}

impl DocLabel {
    pub fn is_hero(&self) -> bool {
        self.stem.starts_with("HERO")
    }

    /// `<stem>_<index>`, used when the plain stem is already taken.
    pub fn suffixed(&self) -> String {
        format!("{}_{}", self.stem, self.index)
    }
}

pub struct Labeler {
    window: usize,
    hero_names: HashMap<String, String>,
    // (lowercased marker, kind)
    markers: Vec<(String, String)>,
}

impl Labeler {
    pub fn new(cfg: &CorpusConfig) -> Self {
        Self {
            window: cfg.label_window,
            hero_names: cfg
                .hero_names
                .iter()
                .map(|h| (h.phrase.to_lowercase(), h.label.clone()))
                .collect(),
            markers: cfg
                .ancillary_markers
                .iter()
                .map(|m| (m.marker.to_lowercase(), m.kind.clone()))
                .collect(),
        }
    }

    pub fn label(&self, entry: &MatterEntry, index: usize) -> DocLabel {
        if let Some(name) = entry.hero.as_ref().and_then(|h| self.hero_names.get(&h.to_lowercase())) {
            return DocLabel { stem: name.clone(), index };
        }

        let header = header_window(&entry.text, self.window);
        let stem = match self.markers.iter().find(|(m, _)| header.contains(m.as_str())) {
            Some((_, kind)) => format!("Ancillary_{kind}_{index}"),
            None => format!("Document_{index}"),
        };
        DocLabel { stem, index }
    }

    /// Labels for every entry, in matter order.
    pub fn label_matter(&self, matter: &Matter) -> Vec<DocLabel> {
        matter.entries.iter().enumerate().map(|(i, e)| self.label(e, i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, hero: Option<&str>) -> MatterEntry {
        MatterEntry { text: s!(text), hero: hero.map(String::from) }
    }

    #[test]
    fn unknown_hero_falls_through_to_markers() {
        let lab = Labeler::new(&CorpusConfig::default());
        let l = lab.label(&entry("EXHIBIT 10.1 ...", Some("not a known phrase")), 3);
        assert_eq!(l.stem, "Ancillary_Exhibit_3");
        assert!(!l.is_hero());
    }

    #[test]
    fn marker_past_label_window_is_not_seen() {
        let lab = Labeler::new(&CorpusConfig::default());
        let text = format!("{}exhibit", "x".repeat(2_500));
        assert_eq!(lab.label(&entry(&text, None), 1).stem, "Document_1");

        // last char inside the window still counts
        let text = format!("{}exhibit{}", "x".repeat(2_000 - "exhibit".len()), "x".repeat(100));
        assert_eq!(lab.label(&entry(&text, None), 1).stem, "Ancillary_Exhibit_1");
    }

    #[test]
    fn marker_table_order_beats_text_order() {
        let lab = Labeler::new(&CorpusConfig::default());
        let l = lab.label(&entry("EXHIBIT 5.1 Legal Opinion of Counsel", None), 2);
        assert_eq!(l.stem, "Ancillary_Legal_Opinion_2");

        let l = lab.label(&entry("Exhibit C: disclosure letter and voting agreement", None), 0);
        assert_eq!(l.stem, "Ancillary_Voting_Agreement_0");
    }

    #[test]
    fn known_hero_uses_canonical_name() {
        let lab = Labeler::new(&CorpusConfig::default());
        let l = lab.label(&entry("... exhibit ...", Some("Credit Agreement")), 5);
        assert_eq!(l.stem, "HERO_Credit_Agreement");
    }

    #[test]
    fn suffix_embeds_index() {
        let l = DocLabel { stem: s!("HERO_LPA"), index: 4 };
        assert_eq!(l.suffixed(), "HERO_LPA_4");
        assert!(l.is_hero());
    }
}
