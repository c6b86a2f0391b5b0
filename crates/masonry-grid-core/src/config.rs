use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Column assignment rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColumnStrategy {
    /// Item `i` goes to column `i % column_count`, regardless of column heights.
    #[default]
    RoundRobin,
    /// Item goes to the column with the smallest running offset (ties: leftmost).
    Shortest,
}

impl FromStr for ColumnStrategy {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "shortest" | "shortest_column" => Ok(Self::Shortest),
            _ => Err(()),
        }
    }
}

/// Horizontal insets of the scrolling container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutParameters {
    /// Number of columns.
    #[serde(default = "default_column_count")]
    pub column_count: u32,
    /// Inset applied on every side of each item's slot.
    #[serde(default = "default_cell_padding")]
    pub cell_padding: f64,
    /// Width available to the columns (container bounds minus insets).
    pub content_width: f64,
    #[serde(default)]
    pub strategy: ColumnStrategy,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            column_count: default_column_count(),
            cell_padding: default_cell_padding(),
            content_width: 0.0,
            strategy: ColumnStrategy::default(),
        }
    }
}

impl LayoutParameters {
    pub fn new(column_count: u32, cell_padding: f64, content_width: f64) -> Self {
        Self {
            column_count,
            cell_padding,
            content_width,
            strategy: ColumnStrategy::default(),
        }
    }

    /// Content width of a container `bounds_width` wide with horizontal `insets`.
    pub fn content_width_for(bounds_width: f64, insets: Insets) -> f64 {
        bounds_width - (insets.left + insets.right)
    }

    /// Width of one column slot (padding included).
    pub fn column_width(&self) -> f64 {
        self.content_width / self.column_count.max(1) as f64
    }

    /// Width proposed to the measurement callback (column width minus padding on both sides).
    pub fn inner_width(&self) -> f64 {
        self.column_width() - self.cell_padding * 2.0
    }

    /// Validates the parameters.
    ///
    /// Returns an error if:
    /// - `column_count` is zero
    /// - `content_width` is not a positive finite number
    /// - `cell_padding` is negative or not finite
    ///
    /// Padding wider than half a column is accepted; `inner_width` is then negative.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::MasonryError;

        if self.column_count == 0 {
            return Err(MasonryError::InvalidParameters(
                "column_count must be at least 1".into(),
            ));
        }
        if !self.content_width.is_finite() || self.content_width <= 0.0 {
            return Err(MasonryError::InvalidParameters(format!(
                "content_width must be positive, got {}",
                self.content_width
            )));
        }
        if !self.cell_padding.is_finite() || self.cell_padding < 0.0 {
            return Err(MasonryError::InvalidParameters(format!(
                "cell_padding must be non-negative, got {}",
                self.cell_padding
            )));
        }
        Ok(())
    }
}

fn default_column_count() -> u32 {
    2
}
fn default_cell_padding() -> f64 {
    6.0
}

/// Builder for `LayoutParameters` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct LayoutParametersBuilder {
    params: LayoutParameters,
}

impl LayoutParametersBuilder {
    pub fn new() -> Self {
        Self {
            params: LayoutParameters::default(),
        }
    }
    pub fn column_count(mut self, v: u32) -> Self {
        self.params.column_count = v;
        self
    }
    pub fn cell_padding(mut self, v: f64) -> Self {
        self.params.cell_padding = v;
        self
    }
    pub fn content_width(mut self, v: f64) -> Self {
        self.params.content_width = v;
        self
    }
    /// Derives the content width from container bounds and insets.
    pub fn container(mut self, bounds_width: f64, insets: Insets) -> Self {
        self.params.content_width = LayoutParameters::content_width_for(bounds_width, insets);
        self
    }
    pub fn strategy(mut self, v: ColumnStrategy) -> Self {
        self.params.strategy = v;
        self
    }
    pub fn build(self) -> LayoutParameters {
        self.params
    }
}

impl LayoutParameters {
    /// Create a fluent builder for `LayoutParameters`.
    pub fn builder() -> LayoutParametersBuilder {
        LayoutParametersBuilder::new()
    }
}
