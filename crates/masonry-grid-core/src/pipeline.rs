use crate::column::picker_for;
use crate::config::LayoutParameters;
use crate::error::{MasonryError, Result};
use crate::measure::Measure;
use crate::model::{LayoutResult, Placement, Rect, Size};
use tracing::{debug, instrument, trace};

#[instrument(skip_all, fields(item_count = item_count, columns = params.column_count))]
/// Lays out `item_count` items into masonry columns and returns one placement per item.
///
/// Notes:
/// - Parameters are validated before `measure` is ever called.
/// - `measure` is called exactly once per item, in index order, with the inner column width.
/// - A negative or non-finite measurement aborts the pass; no partial result is returned.
pub fn compute_layout<M: Measure + ?Sized>(
    item_count: usize,
    params: &LayoutParameters,
    measure: &mut M,
) -> Result<LayoutResult> {
    params.validate()?;

    let columns = params.column_count as usize;
    let column_width = params.column_width();
    let inner_width = params.inner_width();
    let padding = params.cell_padding;

    let mut picker = picker_for(params.strategy);
    let mut y_offset = vec![0.0_f64; columns];
    let mut placements: Vec<Placement> = Vec::with_capacity(item_count);
    let mut content_height = 0.0_f64;

    for index in 0..item_count {
        let column = picker.pick(index, &y_offset);
        let m = measure.measure(index, inner_width);
        if !m.is_valid() {
            return Err(MasonryError::InvalidMeasurement {
                index,
                primary_height: m.primary_height,
                annotation_height: m.annotation_height,
            });
        }
        let height = padding * 2.0 + m.primary_height + m.annotation_height;
        let slot = Rect::new(
            column as f64 * column_width,
            y_offset[column],
            column_width,
            height,
        );
        trace!(index, column, y = slot.y, height, "placed item");
        placements.push(Placement {
            index,
            column,
            frame: slot.inset(padding, padding),
            primary_height: m.primary_height,
        });
        content_height = content_height.max(slot.max_y());
        y_offset[column] += height;
    }

    debug!(items = placements.len(), content_height, "layout computed");
    Ok(LayoutResult {
        placements,
        content_width: params.content_width,
        content_height,
        column_heights: y_offset,
    })
}

/// Placements of `result` intersecting `viewport` (edges inclusive), in index order.
pub fn query(result: &LayoutResult, viewport: Rect) -> impl Iterator<Item = &Placement> {
    result.query(viewport)
}

/// Total scrollable size: the content width and the height of the tallest column.
pub fn total_size(result: &LayoutResult) -> Size {
    result.total_size()
}
