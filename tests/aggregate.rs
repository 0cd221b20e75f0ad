// tests/aggregate.rs
//
// MatterAggregator bucketing and flush policy.
//
use legal_corpus::{MatterAggregator, PracticeArea};
use legal_corpus::PracticeArea::{Funds, LeveragedFinance as LevFin, MergersAndAcquisitions as MnA};
use pretty_assertions::assert_eq;

fn agg(target_matters: usize, docs_per_matter: usize) -> MatterAggregator {
    MatterAggregator::with_targets(&[Funds, LevFin, MnA], target_matters, docs_per_matter)
}

fn offer(a: &mut MatterAggregator, area: PracticeArea, n: usize) -> Option<legal_corpus::Matter> {
    a.offer(area, Some("credit agreement".into()), format!("doc {n}"))
}

#[test]
fn save_event_exactly_at_capacity() {
    let mut a = agg(5, 3);
    assert!(offer(&mut a, LevFin, 0).is_none());
    assert!(offer(&mut a, LevFin, 1).is_none());
    assert_eq!(a.open_len(LevFin), 2);

    let m = offer(&mut a, LevFin, 2).expect("third doc closes the matter");
    assert_eq!(m.area, LevFin);
    assert_eq!(m.index, 1);
    assert_eq!(m.dir_name(), "LevFin_1");
    let texts: Vec<&str> = m.entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["doc 0", "doc 1", "doc 2"]);

    assert_eq!(a.completed(LevFin), 1);
    assert_eq!(a.open_len(LevFin), 0);
    assert_eq!(a.current_index(LevFin), Some(2));

    // next offer starts matter 2 from empty
    assert!(offer(&mut a, LevFin, 3).is_none());
    assert_eq!(a.open_len(LevFin), 1);
}

#[test]
fn never_more_than_target_matters() {
    let mut a = agg(2, 1);
    let mut saved = Vec::new();
    for i in 0..10 {
        if let Some(m) = offer(&mut a, Funds, i) {
            saved.push(m.index);
        }
    }
    assert_eq!(saved, vec![1, 2]);
    assert_eq!(a.completed(Funds), 2);
    assert_eq!(a.open_len(Funds), 0, "docs for a full area are dropped, not buffered");
    assert_eq!(a.current_index(Funds), None);
    assert!(a.finish().is_empty());
}

#[test]
fn areas_are_independent() {
    let mut a = agg(1, 2);
    assert!(offer(&mut a, Funds, 0).is_none());
    assert!(offer(&mut a, MnA, 1).is_none());
    let m = offer(&mut a, Funds, 2).expect("funds closes");
    assert_eq!(m.area, Funds);
    assert_eq!(a.open_len(MnA), 1);
    assert!(!a.is_done());
}

#[test]
fn done_once_every_area_hits_target() {
    let mut a = agg(1, 1);
    offer(&mut a, Funds, 0);
    offer(&mut a, LevFin, 1);
    assert!(!a.is_done());
    offer(&mut a, MnA, 2);
    assert!(a.is_done());
}

#[test]
fn finish_flushes_partial_matter() {
    let mut a = agg(2, 10);
    for i in 0..3 {
        assert!(offer(&mut a, LevFin, i).is_none());
    }
    let flushed = a.finish();
    assert_eq!(flushed.len(), 1);
    assert_eq!(flushed[0].area, LevFin);
    assert_eq!(flushed[0].index, 1);
    assert_eq!(flushed[0].len(), 3);
    assert!(!flushed[0].is_empty());
    assert_eq!(a.completed(LevFin), 1);
    assert_eq!(a.completed(Funds), 0);
}

#[test]
fn finish_after_full_matter_uses_next_index() {
    let mut a = agg(3, 2);
    offer(&mut a, MnA, 0);
    offer(&mut a, MnA, 1); // closes MnA_1
    offer(&mut a, MnA, 2);
    let flushed = a.finish();
    assert_eq!(flushed.len(), 1);
    assert_eq!(flushed[0].index, 2);
    assert_eq!(a.completed(MnA), 2);
}

#[test]
fn unknown_area_is_ignored() {
    let mut a = MatterAggregator::with_targets(&[LevFin], 1, 1);
    assert!(offer(&mut a, Funds, 0).is_none());
    assert_eq!(a.state().area(Funds), None);
    assert!(offer(&mut a, LevFin, 1).is_some());
    assert!(a.is_done());
}
