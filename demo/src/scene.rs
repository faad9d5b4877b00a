//! The sample screen: two sibling boxes, a parent with an inset child and a
//! row of padded labels.

use waterui_measure::{Color, LayoutReport, MeasureExt, Measurable, Point, Rect, Size, Srgb};

/// Width of the rendered screen.
pub const WIDTH: u32 = 320;
/// Height of the rendered screen.
pub const HEIGHT: u32 = 380;

const MARGIN: f32 = 20.0;
const ROW_SPACING: f32 = 40.0;
const SIBLING_SPACING: f32 = 60.0;
const LABEL_SPACING: f32 = 50.0;
const LABEL_PADDING: f32 = 12.0;
const CHILD_INSET: f32 = 10.0;
/// Text size of "Label A" / "Label B" at the demo's body font.
const LABEL_TEXT: Size = Size::new(52.0, 17.0);

const SURFACE: Color = Srgb::WHITE.with_opacity(1.0);
const BOX_A: Color = Srgb::from_hex("#64B5F6").with_opacity(1.0);
const BOX_B: Color = Srgb::from_hex("#81C784").with_opacity(1.0);
const PARENT: Color = Srgb::from_hex("#9E9E9E").with_opacity(0.2);
const CHILD: Color = Srgb::from_hex("#BA68C8").with_opacity(1.0);
const LABEL_A: Color = Srgb::from_hex("#FFEB3B").with_opacity(1.0);
const LABEL_B: Color = Srgb::from_hex("#4DD0E1").with_opacity(1.0);

/// A tagged box in the sample screen.
pub struct Block {
    pub tag: Measurable<&'static str>,
    pub frame: Rect,
    pub color: Color,
}

/// The laid-out sample screen.
pub struct Scene {
    pub blocks: Vec<Block>,
}

impl Scene {
    /// Lays out the screen: rows stacked 40 apart, each row centered on its
    /// tallest item.
    pub fn layout() -> Self {
        let mut blocks = Vec::new();

        // Siblings, 60 apart.
        let top = MARGIN;
        let box_a = Rect::from_xywh(MARGIN, top, 80.0, 80.0);
        let box_b = Rect::from_xywh(box_a.max_x() + SIBLING_SPACING, top + 10.0, 100.0, 60.0);
        blocks.push(Block {
            tag: "Box A".measurable(),
            frame: box_a,
            color: BOX_A,
        });
        blocks.push(Block {
            tag: "Box B".measurable(),
            frame: box_b,
            color: BOX_B,
        });

        // Parent with a child pinned to its bottom-trailing corner.
        let parent = Rect::from_xywh(MARGIN, box_a.max_y() + ROW_SPACING, 200.0, 120.0);
        let child = Rect::from_xywh(
            parent.max_x() - CHILD_INSET - 80.0,
            parent.max_y() - CHILD_INSET - 50.0,
            80.0,
            50.0,
        );
        blocks.push(Block {
            tag: "Parent".measurable(),
            frame: parent,
            color: PARENT,
        });
        blocks.push(Block {
            tag: "Child".measurable(),
            frame: child,
            color: CHILD,
        });

        // Padded labels, 50 apart.
        let label_width = LABEL_PADDING.mul_add(2.0, LABEL_TEXT.width);
        let label_height = LABEL_PADDING.mul_add(2.0, LABEL_TEXT.height);
        let label_a = Rect::from_xywh(
            MARGIN,
            parent.max_y() + ROW_SPACING,
            label_width,
            label_height,
        );
        let label_b = Rect::from_xywh(
            label_a.max_x() + LABEL_SPACING,
            label_a.min_y(),
            label_width,
            label_height,
        );
        blocks.push(Block {
            tag: "Label A".measurable(),
            frame: label_a,
            color: LABEL_A,
        });
        blocks.push(Block {
            tag: "Label B".measurable(),
            frame: label_b,
            color: LABEL_B,
        });

        Self { blocks }
    }

    /// Collects the bounds of every tagged block.
    pub fn report(&self) -> LayoutReport {
        let mut report = LayoutReport::new();
        for block in &self.blocks {
            block.tag.report(block.frame, &mut report);
        }
        report
    }

    /// Background color of the screen.
    pub const fn background() -> Color {
        SURFACE
    }

    fn frame_of(&self, content: &str) -> Option<Rect> {
        self.blocks
            .iter()
            .find(|block| *block.tag.content() == content)
            .map(|block| block.frame)
    }

    /// Center of the block with the given content, for scripted taps.
    pub fn center_of(&self, content: &str) -> Option<Point> {
        self.frame_of(content)
            .map(|frame| Point::new(frame.mid_x(), frame.mid_y()))
    }

    /// The default tap script: measure the labels, then the boxes, clear,
    /// then measure the child inside its parent.
    pub fn script(&self) -> Vec<Point> {
        let mut taps: Vec<Point> = [
            "Label A", "Label B", "Label A", "Box A", "Box B", "Box A", "Box B",
        ]
        .into_iter()
        .filter_map(|content| self.center_of(content))
        .collect();
        // Tap the parent away from the child so the parent itself is hit.
        taps.extend(
            self.frame_of("Parent")
                .map(|frame| frame.origin().offset(10.0, 10.0)),
        );
        taps.extend(self.center_of("Child"));
        taps
    }
}
