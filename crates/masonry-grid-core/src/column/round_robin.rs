use super::ColumnPicker;

/// Cycles through the columns in strict rotation: 0, 1, .., n-1, 0, ..
#[derive(Debug, Default, Clone)]
pub struct RoundRobinPicker {
    next: usize,
}

impl RoundRobinPicker {
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl ColumnPicker for RoundRobinPicker {
    fn pick(&mut self, _index: usize, column_heights: &[f64]) -> usize {
        let column = self.next;
        self.next = if column + 1 >= column_heights.len() {
            0
        } else {
            column + 1
        };
        column
    }
}
