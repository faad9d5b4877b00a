//! Geometry primitives shared by the measurement engine.
//!
//! # Logical Pixels (Points)
//!
//! Every value here is expressed in **logical pixels**, the same unit the host
//! layout pass reports view bounds in. All rectangles handed to the engine must
//! live in one shared coordinate space (normally the overlay's own space);
//! nothing in this module converts between spaces.
//!
//! A negative width or height extends a rectangle from its origin in the
//! opposite direction; every edge accessor reports normalized values. Zero
//! sizes are accepted too and produce degenerate but well-defined results.

/// Absolute coordinate in the overlay's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// The x-coordinate in pixels.
    pub x: f32,
    /// The y-coordinate in pixels.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Returns this point moved by `dx` and `dy`.
    #[must_use]
    pub const fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Two-dimensional size expressed in absolute pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    /// The width in pixels.
    pub width: f32,
    /// The height in pixels.
    pub height: f32,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Axis-aligned rectangle in the shared overlay coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Shorthand for `Rect::new(Point::new(x, y), Size::new(width, height))`.
    #[must_use]
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// Returns the rectangle's origin.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the rectangle's width, ignoring the sign of the stored size.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width.abs()
    }

    /// Returns the rectangle's height, ignoring the sign of the stored size.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height.abs()
    }

    /// Returns the rectangle's minimum x-coordinate.
    ///
    /// Edges are normalized: a negative width extends the rectangle to the
    /// left of its origin.
    #[must_use]
    pub const fn min_x(&self) -> f32 {
        self.origin.x.min(self.origin.x + self.size.width)
    }

    /// Returns the rectangle's minimum y-coordinate.
    #[must_use]
    pub const fn min_y(&self) -> f32 {
        self.origin.y.min(self.origin.y + self.size.height)
    }

    /// Returns the rectangle's maximum x-coordinate.
    #[must_use]
    pub const fn max_x(&self) -> f32 {
        self.origin.x.max(self.origin.x + self.size.width)
    }

    /// Returns the rectangle's maximum y-coordinate.
    #[must_use]
    pub const fn max_y(&self) -> f32 {
        self.origin.y.max(self.origin.y + self.size.height)
    }

    /// Returns the rectangle's midpoint x-coordinate.
    #[must_use]
    pub const fn mid_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    /// Returns the rectangle's midpoint y-coordinate.
    #[must_use]
    pub const fn mid_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }

    /// Returns `true` when `other` lies entirely inside this rectangle.
    ///
    /// Edges may coincide, so a rectangle contains itself.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.min_x() <= other.min_x()
            && self.max_x() >= other.max_x()
            && self.min_y() <= other.min_y()
            && self.max_y() >= other.max_y()
    }

    /// Returns `true` when `point` falls inside the rectangle.
    ///
    /// The minimum edges are inclusive and the maximum edges exclusive, so
    /// adjacent rectangles never both claim a point on their shared edge.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }
}

/// A straight line between two points, used for measurement lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Where the line starts.
    pub start: Point,
    /// Where the line ends.
    pub end: Point,
}

impl Segment {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns the point halfway along the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Whether the segment runs mostly along the x axis.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        (self.end.y - self.start.y).abs() < (self.end.x - self.start.x).abs()
    }
}
