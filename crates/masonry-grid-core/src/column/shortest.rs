use super::ColumnPicker;

/// Canonical masonry packing: the column whose running offset is smallest, leftmost on ties.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortestColumnPicker;

impl ColumnPicker for ShortestColumnPicker {
    fn pick(&mut self, _index: usize, column_heights: &[f64]) -> usize {
        let mut best = 0;
        for (i, h) in column_heights.iter().enumerate().skip(1) {
            if *h < column_heights[best] {
                best = i;
            }
        }
        best
    }
}
