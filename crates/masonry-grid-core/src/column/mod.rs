use crate::config::ColumnStrategy;

pub mod round_robin;
pub mod shortest;

pub use round_robin::RoundRobinPicker;
pub use shortest::ShortestColumnPicker;

/// A picker chooses the column for the next item.
///
/// `column_heights` holds the running bottom offset of every column and is never empty.
/// Implementations must return an index in `0..column_heights.len()`.
pub trait ColumnPicker {
    fn pick(&mut self, index: usize, column_heights: &[f64]) -> usize;
}

/// Picker for the configured strategy.
pub fn picker_for(strategy: ColumnStrategy) -> Box<dyn ColumnPicker> {
    match strategy {
        ColumnStrategy::RoundRobin => Box::new(RoundRobinPicker::new()),
        ColumnStrategy::Shortest => Box::new(ShortestColumnPicker),
    }
}
