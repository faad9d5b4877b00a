//! Turns the registry and selection into overlay drawing commands.

use alloc::{format, string::String, vec::Vec};
use core::hash::Hash;

use waterui_measure_core::{Containment, EdgeGap, Measurement, Point, Registry, Selection};

use crate::{
    command::{DrawCommand, OverlayContext},
    style::OverlayStyle,
    text::TextMeasure,
};

/// Renders one overlay frame.
///
/// Highlight boxes are always drawn for every registered item. Measurement
/// lines are added only when two items are selected and both are still
/// registered; a selected item that left the screen simply draws nothing.
pub fn render<Id, T>(
    registry: &Registry<Id>,
    selection: &Selection<Id>,
    style: &OverlayStyle,
    text: &T,
) -> Vec<DrawCommand>
where
    Id: Eq + Hash,
    T: TextMeasure + ?Sized,
{
    let mut context = OverlayContext::new(style, text);

    for (id, rect) in registry.iter() {
        if selection.contains(id) {
            context.fill_rect(
                *rect,
                style.highlight.with_opacity(style.selected_fill_opacity),
            );
            context.stroke_rect(
                *rect,
                style.highlight.with_opacity(1.0),
                style.selected_stroke_width,
            );
        } else {
            context.stroke_rect(
                *rect,
                style.highlight.with_opacity(style.idle_stroke_opacity),
                style.idle_stroke_width,
            );
        }
    }

    match resolve_pair(registry, selection) {
        Some(Measurement::Sibling(gap)) => draw_sibling(&mut context, &gap),
        Some(Measurement::Containment(insets)) => draw_containment(&mut context, &insets),
        None => {}
    }

    context.into_commands()
}

/// Measures the selected pair, if two items are selected and both are registered.
#[must_use]
pub fn resolve_pair<Id: Eq + Hash>(
    registry: &Registry<Id>,
    selection: &Selection<Id>,
) -> Option<Measurement> {
    let (first, second) = selection.pair()?;
    let a = registry.get(first)?;
    let b = registry.get(second)?;
    Some(Measurement::classify(a, b))
}

fn draw_sibling<T: TextMeasure + ?Sized>(context: &mut OverlayContext<'_, T>, gap: &EdgeGap) {
    let color = context.style().sibling_color;
    // Push the two labels apart so diagonal measurements stay readable.
    let offset = if gap.is_diagonal() {
        context.style().label_offset
    } else {
        0.0
    };

    if let Some(horizontal) = gap.horizontal {
        context.measure_line(
            horizontal.line,
            format_distance(horizontal.distance),
            color,
            Point::new(0.0, -offset),
        );
    }
    if let Some(vertical) = gap.vertical {
        context.measure_line(
            vertical.line,
            format_distance(vertical.distance),
            color,
            Point::new(offset, 0.0),
        );
    }
}

fn draw_containment<T: TextMeasure + ?Sized>(
    context: &mut OverlayContext<'_, T>,
    insets: &Containment,
) {
    let color = context.style().containment_color;
    for (_, inset) in insets.iter().filter(|(_, inset)| inset.distance > 0.0) {
        context.measure_line(
            inset.line,
            format_distance(inset.distance),
            color,
            Point::zero(),
        );
    }
}

/// Formats a distance for a label: no decimals when integral, one otherwise.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_distance(value: f32) -> String {
    // Exact comparison: only true integers drop their decimals.
    if value == value.round() {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
