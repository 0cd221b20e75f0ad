// src/runner.rs
use crate::{
    classify::{Classifier, PracticeArea},
    config::CorpusConfig,
    core::sanitize::snippet,
    error::Result,
    label::Labeler,
    matter::{Matter, MatterAggregator},
    progress::{Progress, format_tallies},
    sink::{LabeledDocument, PersistenceSink, SavedMatter},
    source::DocumentSource,
};

/// Summary of what was produced.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub docs_scanned: u64,
    /// Documents that landed in a matter.
    pub docs_accepted: u64,
    /// Completed matters per area after the flush.
    pub matters: Vec<(PracticeArea, usize)>,
    pub saved: Vec<SavedMatter>,
    /// Every area hit its target before the source ran dry.
    pub stopped_early: bool,
}

impl RunSummary {
    pub fn matters_for(&self, area: PracticeArea) -> usize {
        self.matters.iter().find(|(a, _)| *a == area).map_or(0, |(_, n)| *n)
    }
}

/// One pass over `source`: classify, bucket, save. Stops once every area has
/// its target number of matters, then saves whatever partial matters remain.
pub fn run(
    source: impl DocumentSource,
    cfg: &CorpusConfig,
    sink: &mut dyn PersistenceSink,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    cfg.validate()?;

    let classifier = Classifier::new(cfg);
    let labeler = Labeler::new(cfg);
    let mut agg = MatterAggregator::new(cfg);
    let mut summary = RunSummary::default();

    logf!(
        "Scanning for documents... Target: {} matters per practice area, {} docs per matter",
        cfg.target_matters,
        cfg.docs_per_matter
    );
    if let Some(p) = progress.as_deref_mut() {
        p.begin();
    }

    for doc in source {
        summary.docs_scanned += 1;

        if let Some(class) = classifier.classify(&doc.text) {
            match agg.current_index(class.area) {
                Some(index) => {
                    logf!(
                        "[Found {}_{index}] {}: {}...",
                        class.area,
                        class.hero,
                        snippet(&doc.text, 50)
                    );
                    summary.docs_accepted += 1;
                    if let Some(matter) = agg.offer(class.area, Some(class.hero), doc.text) {
                        let saved = save_matter(&labeler, sink, &matter)?;
                        if let Some(p) = progress.as_deref_mut() {
                            p.matter_saved(&saved);
                        }
                        summary.saved.push(saved);
                    }
                }
                None => logd!("{} full, dropping {} ({})", class.area, doc.origin, class.hero),
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.doc_scanned(summary.docs_scanned, &agg.state().tallies());
        }

        if agg.is_done() {
            logf!("*** All test sets collected! ***");
            summary.stopped_early = true;
            break;
        }
    }

    let partial = agg.finish();
    if !partial.is_empty() {
        logf!("--- Saving remaining partial matters ---");
    }
    for matter in &partial {
        let saved = save_matter(&labeler, sink, matter)?;
        if let Some(p) = progress.as_deref_mut() {
            p.matter_saved(&saved);
        }
        summary.saved.push(saved);
    }

    summary.matters = agg.state().tallies();
    logf!(
        "Scan complete: {} docs scanned, {} kept | {}",
        summary.docs_scanned,
        summary.docs_accepted,
        format_tallies(&summary.matters)
    );
    if let Some(p) = progress.as_deref_mut() {
        p.finish(&summary);
    }
    Ok(summary)
}

fn save_matter(labeler: &Labeler, sink: &mut dyn PersistenceSink, matter: &Matter) -> Result<SavedMatter> {
    let docs: Vec<LabeledDocument<'_>> = labeler
        .label_matter(matter)
        .into_iter()
        .zip(&matter.entries)
        .map(|(label, entry)| LabeledDocument { text: &entry.text, label })
        .collect();

    logf!("--- Saving {} ({} docs) ---", matter.dir_name(), docs.len());
    let saved = sink.save(matter.area, matter.index, &docs)?;
    for f in &saved.files {
        let name = f.path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let marker = if f.hero { "[HERO]" } else { "[ancillary]" };
        logf!("    {marker} {name}");
    }
    Ok(saved)
}
