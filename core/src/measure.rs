//! Distance computation between two measured rectangles.
//!
//! A pair of rectangles is either *siblings* (neither contains the other), in
//! which case the engine reports the gap between their nearest edges on each
//! axis, or *parent and child*, in which case it reports the four insets from
//! the parent's edges to the child's.
//!
//! Every function here is total: degenerate and overlapping inputs produce
//! empty or zero results instead of errors.

use crate::geometry::{Point, Rect, Segment};

/// Distance between the nearest edges of two rectangles along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gap {
    /// The gap, always strictly positive.
    pub distance: f32,
    /// The line connecting the two facing edges.
    pub line: Segment,
}

/// Nearest-edge gaps between two sibling rectangles.
///
/// An axis is `None` when the rectangles overlap or touch along it.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct EdgeGap {
    /// Gap between the left rectangle's right edge and the right rectangle's left edge.
    pub horizontal: Option<Gap>,
    /// Gap between the upper rectangle's bottom edge and the lower rectangle's top edge.
    pub vertical: Option<Gap>,
}

impl EdgeGap {
    /// Computes both axis gaps between `a` and `b`.
    #[must_use]
    pub fn between(a: &Rect, b: &Rect) -> Self {
        Self {
            horizontal: horizontal_gap(a, b),
            vertical: vertical_gap(a, b),
        }
    }

    /// Whether both axes report a gap (diagonal siblings).
    #[must_use]
    pub const fn is_diagonal(&self) -> bool {
        self.horizontal.is_some() && self.vertical.is_some()
    }

    /// Whether neither axis reports a gap.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }
}

fn horizontal_gap(a: &Rect, b: &Rect) -> Option<Gap> {
    // Line sits halfway through the vertical overlap (or the gap between the
    // two y-ranges when they don't overlap).
    let mid_y = (a.min_y().max(b.min_y()) + a.max_y().min(b.max_y())) / 2.0;

    let a_left = b.min_x() - a.max_x();
    let b_left = a.min_x() - b.max_x();

    if a_left > 0.0 {
        Some(Gap {
            distance: a_left,
            line: Segment::new(Point::new(a.max_x(), mid_y), Point::new(b.min_x(), mid_y)),
        })
    } else if b_left > 0.0 {
        Some(Gap {
            distance: b_left,
            line: Segment::new(Point::new(b.max_x(), mid_y), Point::new(a.min_x(), mid_y)),
        })
    } else {
        None
    }
}

fn vertical_gap(a: &Rect, b: &Rect) -> Option<Gap> {
    let mid_x = (a.min_x().max(b.min_x()) + a.max_x().min(b.max_x())) / 2.0;

    let a_above = b.min_y() - a.max_y();
    let b_above = a.min_y() - b.max_y();

    if a_above > 0.0 {
        Some(Gap {
            distance: a_above,
            line: Segment::new(Point::new(mid_x, a.max_y()), Point::new(mid_x, b.min_y())),
        })
    } else if b_above > 0.0 {
        Some(Gap {
            distance: b_above,
            line: Segment::new(Point::new(mid_x, b.max_y()), Point::new(mid_x, a.min_y())),
        })
    } else {
        None
    }
}

/// One side of a parent rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The top edge.
    Top,
    /// The bottom edge.
    Bottom,
    /// The left edge.
    Left,
    /// The right edge.
    Right,
}

/// Distance from one child edge to the matching parent edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inset {
    /// The inset, never negative when the parent contains the child.
    pub distance: f32,
    /// Line from the child's edge to the parent's edge.
    pub line: Segment,
}

/// Insets from a parent rectangle to a child it contains.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Containment {
    /// Child top edge to parent top edge.
    pub top: Inset,
    /// Child bottom edge to parent bottom edge.
    pub bottom: Inset,
    /// Child left edge to parent left edge.
    pub left: Inset,
    /// Child right edge to parent right edge.
    pub right: Inset,
}

impl Containment {
    /// Computes all four insets of `child` within `parent`.
    ///
    /// Vertical inset lines run through the child's horizontal midpoint and
    /// horizontal inset lines through its vertical midpoint.
    #[must_use]
    pub fn calculate(parent: &Rect, child: &Rect) -> Self {
        let mid_x = child.mid_x();
        let mid_y = child.mid_y();

        Self {
            top: Inset {
                distance: child.min_y() - parent.min_y(),
                line: Segment::new(
                    Point::new(mid_x, child.min_y()),
                    Point::new(mid_x, parent.min_y()),
                ),
            },
            bottom: Inset {
                distance: parent.max_y() - child.max_y(),
                line: Segment::new(
                    Point::new(mid_x, child.max_y()),
                    Point::new(mid_x, parent.max_y()),
                ),
            },
            left: Inset {
                distance: child.min_x() - parent.min_x(),
                line: Segment::new(
                    Point::new(child.min_x(), mid_y),
                    Point::new(parent.min_x(), mid_y),
                ),
            },
            right: Inset {
                distance: parent.max_x() - child.max_x(),
                line: Segment::new(
                    Point::new(child.max_x(), mid_y),
                    Point::new(parent.max_x(), mid_y),
                ),
            },
        }
    }

    /// Iterates the insets in top, bottom, left, right order.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, &Inset)> {
        [
            (Edge::Top, &self.top),
            (Edge::Bottom, &self.bottom),
            (Edge::Left, &self.left),
            (Edge::Right, &self.right),
        ]
        .into_iter()
    }
}

/// Result of measuring a pair of rectangles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Measurement {
    /// Neither rectangle contains the other.
    Sibling(EdgeGap),
    /// One rectangle contains the other. The larger one is always the parent.
    Containment(Containment),
}

impl Measurement {
    /// Classifies the pair and measures it.
    ///
    /// Selection order does not matter for containment: whichever rectangle
    /// contains the other is treated as the parent. Equal rectangles count as
    /// containment with four zero insets.
    #[must_use]
    pub fn classify(a: &Rect, b: &Rect) -> Self {
        if a.contains(b) {
            Self::Containment(Containment::calculate(a, b))
        } else if b.contains(a) {
            Self::Containment(Containment::calculate(b, a))
        } else {
            Self::Sibling(EdgeGap::between(a, b))
        }
    }
}

/// Free-function form of [`Measurement::classify`].
#[must_use]
pub fn classify(a: &Rect, b: &Rect) -> Measurement {
    Measurement::classify(a, b)
}
