use super::*;
use crate::foundation::core::{BrushSize, Point};
use crate::history::stroke::SamplePoint;

fn stroke_at(x: f64) -> Stroke {
    Stroke::new(vec![SamplePoint::new(
        Point::new(x, x),
        BrushSize::DEFAULT,
    )])
    .unwrap()
}

#[test]
fn fresh_timeline_has_no_mask() {
    let t = Timeline::new();
    assert!(!t.has_mask());
    assert_eq!(t.cursor(), None);
    assert!(t.is_empty());
    assert!(!t.can_undo());
    assert!(!t.can_redo());
}

#[test]
fn has_mask_tracks_appends_minus_undos() {
    for n in 0..5usize {
        for m in 0..=n {
            let mut t = Timeline::new();
            for i in 0..n {
                t.append(stroke_at(i as f64));
            }
            for _ in 0..m {
                assert!(t.undo());
            }
            assert_eq!(t.has_mask(), n - m > 0, "n={n} m={m}");
            assert_eq!(t.len(), n);
        }
    }
}

#[test]
fn undo_and_redo_are_noops_at_the_ends() {
    let mut t = Timeline::new();
    assert!(!t.undo());
    t.append(stroke_at(1.0));
    assert!(!t.redo());
    assert!(t.undo());
    assert!(!t.undo());
    assert_eq!(t.cursor(), None);
    assert!(t.redo());
    assert_eq!(t.cursor(), Some(0));
}

#[test]
fn append_after_undo_truncates_redo_tail() {
    let mut t = Timeline::new();
    t.append(stroke_at(1.0));
    t.append(stroke_at(2.0));
    assert!(t.undo());
    t.append(stroke_at(3.0));

    assert!(!t.redo());
    assert_eq!(t.len(), 2);
    assert_eq!(t.cursor(), Some(1));
    let xs: Vec<f64> = t.active().iter().map(|s| s.points()[0].x).collect();
    assert_eq!(xs, vec![1.0, 3.0]);
}

#[test]
fn clear_resets_everything() {
    let mut t = Timeline::new();
    t.append(stroke_at(1.0));
    t.append(stroke_at(2.0));
    t.undo();
    t.clear();
    assert!(!t.has_mask());
    assert!(t.is_empty());
    assert!(!t.can_redo());
    assert!(t.active().is_empty());
}

#[test]
fn upto_clamps_to_stored_strokes() {
    let mut t = Timeline::new();
    t.append(stroke_at(1.0));
    t.append(stroke_at(2.0));
    assert_eq!(t.upto(None).len(), 0);
    assert_eq!(t.upto(Some(0)).len(), 1);
    assert_eq!(t.upto(Some(9)).len(), 2);
}

#[test]
fn upto_saturates_at_the_largest_index() {
    let mut t = Timeline::new();
    assert!(t.upto(Some(usize::MAX)).is_empty());
    t.append(stroke_at(1.0));
    assert_eq!(t.upto(Some(usize::MAX)).len(), 1);
}
