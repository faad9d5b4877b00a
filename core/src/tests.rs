//! Measurement engine tests.
//!
//! These cover the sibling/containment classification, the nearest-edge gap
//! rules and the inset arithmetic, including the degenerate inputs the overlay
//! must tolerate.

use alloc::vec::Vec;

use crate::{Containment, EdgeGap, Measurement, Point, Rect, Segment, classify};

// ============================================================================
// Helper Functions
// ============================================================================

fn expect_sibling(measurement: Measurement) -> EdgeGap {
    match measurement {
        Measurement::Sibling(gap) => gap,
        Measurement::Containment(containment) => {
            panic!("expected siblings, got containment {containment:?}")
        }
    }
}

fn expect_containment(measurement: Measurement) -> Containment {
    match measurement {
        Measurement::Containment(containment) => containment,
        Measurement::Sibling(gap) => panic!("expected containment, got siblings {gap:?}"),
    }
}

fn seg(x1: f32, y1: f32, x2: f32, y2: f32) -> Segment {
    Segment::new(Point::new(x1, y1), Point::new(x2, y2))
}

/// A small deterministic grid of rectangles, including zero-sized ones.
fn sample_rects() -> Vec<Rect> {
    let mut rects = Vec::new();
    for x in [0.0, 15.0, 40.0] {
        for y in [0.0, 25.0] {
            for (w, h) in [(0.0, 0.0), (10.0, 30.0), (40.0, 10.0), (60.0, 60.0)] {
                rects.push(Rect::from_xywh(x, y, w, h));
            }
        }
    }
    rects
}

// ============================================================================
// Sibling Gaps
// ============================================================================

#[test]
fn side_by_side_siblings_report_horizontal_gap() {
    let a = Rect::from_xywh(0.0, 0.0, 80.0, 80.0);
    let b = Rect::from_xywh(140.0, 0.0, 100.0, 60.0);

    let gap = expect_sibling(classify(&a, &b));
    let horizontal = gap.horizontal.expect("horizontal gap");
    assert_eq!(horizontal.distance, 60.0);
    // Line runs through the middle of the shared 0..60 band.
    assert_eq!(horizontal.line, seg(80.0, 30.0, 140.0, 30.0));
    assert!(gap.vertical.is_none());
}

#[test]
fn sibling_gap_ignores_selection_order() {
    let a = Rect::from_xywh(0.0, 0.0, 80.0, 80.0);
    let b = Rect::from_xywh(140.0, 0.0, 100.0, 60.0);

    assert_eq!(EdgeGap::between(&a, &b), EdgeGap::between(&b, &a));
}

#[test]
fn stacked_siblings_report_vertical_gap() {
    let top = Rect::from_xywh(0.0, 0.0, 50.0, 50.0);
    let bottom = Rect::from_xywh(10.0, 100.0, 20.0, 20.0);

    let gap = EdgeGap::between(&bottom, &top);
    assert!(gap.horizontal.is_none());
    let vertical = gap.vertical.expect("vertical gap");
    assert_eq!(vertical.distance, 50.0);
    assert_eq!(vertical.line, seg(20.0, 50.0, 20.0, 100.0));
}

#[test]
fn diagonal_siblings_report_both_axes() {
    let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
    let b = Rect::from_xywh(30.0, 40.0, 10.0, 10.0);

    let gap = EdgeGap::between(&a, &b);
    assert!(gap.is_diagonal());

    let horizontal = gap.horizontal.expect("horizontal gap");
    assert_eq!(horizontal.distance, 20.0);
    // No vertical overlap: the line sits between the two y-ranges.
    assert_eq!(horizontal.line, seg(10.0, 25.0, 30.0, 25.0));

    let vertical = gap.vertical.expect("vertical gap");
    assert_eq!(vertical.distance, 30.0);
    assert_eq!(vertical.line, seg(20.0, 10.0, 20.0, 40.0));
}

#[test]
fn touching_siblings_report_no_gap() {
    let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
    let b = Rect::from_xywh(10.0, 0.0, 10.0, 10.0);

    assert!(expect_sibling(classify(&a, &b)).is_empty());
}

#[test]
fn overlapping_siblings_report_no_gap() {
    let a = Rect::from_xywh(0.0, 0.0, 20.0, 20.0);
    let b = Rect::from_xywh(10.0, 10.0, 20.0, 20.0);

    assert!(expect_sibling(classify(&a, &b)).is_empty());
}

#[test]
fn fractional_gap_is_preserved() {
    let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
    let b = Rect::from_xywh(12.5, 0.0, 10.0, 10.0);

    let horizontal = EdgeGap::between(&a, &b).horizontal.expect("gap");
    assert_eq!(horizontal.distance, 2.5);
}

// ============================================================================
// Containment
// ============================================================================

#[test]
fn child_insets_within_parent() {
    let parent = Rect::from_xywh(0.0, 0.0, 200.0, 120.0);
    let child = Rect::from_xywh(100.0, 60.0, 80.0, 50.0);

    let insets = expect_containment(classify(&parent, &child));
    assert_eq!(insets.top.distance, 60.0);
    assert_eq!(insets.bottom.distance, 10.0);
    assert_eq!(insets.left.distance, 100.0);
    assert_eq!(insets.right.distance, 20.0);

    assert_eq!(insets.top.line, seg(140.0, 60.0, 140.0, 0.0));
    assert_eq!(insets.bottom.line, seg(140.0, 110.0, 140.0, 120.0));
    assert_eq!(insets.left.line, seg(100.0, 85.0, 0.0, 85.0));
    assert_eq!(insets.right.line, seg(180.0, 85.0, 200.0, 85.0));
}

#[test]
fn larger_rect_is_parent_regardless_of_order() {
    let parent = Rect::from_xywh(0.0, 0.0, 200.0, 120.0);
    let child = Rect::from_xywh(100.0, 60.0, 80.0, 50.0);

    assert_eq!(classify(&child, &parent), classify(&parent, &child));
}

#[test]
fn equal_rects_are_containment_with_zero_insets() {
    let rect = Rect::from_xywh(5.0, 5.0, 40.0, 40.0);

    let insets = expect_containment(classify(&rect, &rect));
    assert!(insets.iter().all(|(_, inset)| inset.distance == 0.0));
}

#[test]
fn zero_sized_child_is_contained() {
    let parent = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
    let dot = Rect::from_xywh(50.0, 25.0, 0.0, 0.0);

    let insets = expect_containment(classify(&dot, &parent));
    assert_eq!(insets.top.distance, 25.0);
    assert_eq!(insets.bottom.distance, 75.0);
    assert_eq!(insets.left.distance, 50.0);
    assert_eq!(insets.right.distance, 50.0);
}

#[test]
fn inverted_rect_measures_like_its_normalized_form() {
    let inverted = Rect::from_xywh(10.0, 0.0, -10.0, 10.0);
    let normal = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
    let other = Rect::from_xywh(20.0, 0.0, 10.0, 10.0);

    assert_eq!(classify(&inverted, &other), classify(&normal, &other));

    let horizontal = expect_sibling(classify(&inverted, &other))
        .horizontal
        .expect("horizontal gap");
    assert_eq!(horizontal.distance, 10.0);
    assert_eq!(horizontal.line, seg(10.0, 5.0, 20.0, 5.0));
    assert!(inverted.contains_point(Point::new(5.0, 5.0)));
}

#[test]
fn inverted_parent_contains_normalized_child() {
    let parent = Rect::from_xywh(100.0, 100.0, -100.0, -100.0);
    let child = Rect::from_xywh(20.0, 20.0, 30.0, 30.0);

    let insets = expect_containment(classify(&child, &parent));
    assert_eq!(insets.top.distance, 20.0);
    assert_eq!(insets.bottom.distance, 50.0);
    assert_eq!(insets.left.distance, 20.0);
    assert_eq!(insets.right.distance, 50.0);
    assert_eq!(insets.top.line, seg(35.0, 20.0, 35.0, 0.0));
    assert_eq!(insets.right.line, seg(50.0, 35.0, 100.0, 35.0));
}

#[test]
fn inverted_rect_equals_itself_as_containment() {
    let inverted = Rect::from_xywh(10.0, 10.0, -5.0, -5.0);

    let insets = expect_containment(classify(&inverted, &inverted));
    assert!(insets.iter().all(|(_, inset)| inset.distance == 0.0));
}

// ============================================================================
// Properties over a rectangle grid
// ============================================================================

#[test]
fn classification_matches_containment() {
    let rects = sample_rects();
    for a in &rects {
        for b in &rects {
            let contained = a.contains(b) || b.contains(a);
            let is_containment = matches!(classify(a, b), Measurement::Containment(_));
            assert_eq!(contained, is_containment, "a={a:?} b={b:?}");
        }
    }
}

#[test]
fn horizontal_gap_present_iff_x_ranges_separate() {
    let rects = sample_rects();
    for a in &rects {
        for b in &rects {
            let separated = b.min_x() > a.max_x() || a.min_x() > b.max_x();
            let gap = EdgeGap::between(a, b);
            assert_eq!(gap.horizontal.is_some(), separated, "a={a:?} b={b:?}");
            if let Some(horizontal) = gap.horizontal {
                let expected = (b.min_x() - a.max_x()).max(a.min_x() - b.max_x());
                assert_eq!(horizontal.distance, expected);
                assert_eq!(horizontal.line.start.y, horizontal.line.end.y);
                assert_eq!((horizontal.line.end.x - horizontal.line.start.x).abs(), expected);
            }
        }
    }
}

#[test]
fn insets_partition_parent() {
    let rects = sample_rects();
    for parent in &rects {
        for child in rects.iter().filter(|child| parent.contains(child)) {
            let insets = Containment::calculate(parent, child);
            assert!(insets.iter().all(|(_, inset)| inset.distance >= 0.0));
            assert_eq!(
                insets.top.distance + insets.bottom.distance + child.height(),
                parent.height()
            );
            assert_eq!(
                insets.left.distance + insets.right.distance + child.width(),
                parent.width()
            );
        }
    }
}
