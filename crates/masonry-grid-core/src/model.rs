use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle. `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
    /// Right edge coordinate (`x + w`).
    pub fn max_x(&self) -> f64 {
        self.x + self.w
    }
    /// Bottom edge coordinate (`y + h`).
    pub fn max_y(&self) -> f64 {
        self.y + self.h
    }
    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the top and bottom.
    /// Sizes never go below zero.
    pub fn inset(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(
            self.x + dx,
            self.y + dy,
            (self.w - dx * 2.0).max(0.0),
            (self.h - dy * 2.0).max(0.0),
        )
    }
    /// Closed-interval intersection: rectangles that only share an edge or a corner intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.max_x()
            && other.x <= self.max_x()
            && self.y <= other.max_y()
            && other.y <= self.max_y()
    }
    pub fn area(&self) -> f64 {
        self.w * self.h
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Heights reported by a measurement callback for one item at a proposed width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ItemMeasurement {
    /// Height of the main content (e.g. the photo).
    pub primary_height: f64,
    /// Height of the secondary annotation below the main content.
    pub annotation_height: f64,
}

impl ItemMeasurement {
    pub fn new(primary_height: f64, annotation_height: f64) -> Self {
        Self {
            primary_height,
            annotation_height,
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        ok(self.primary_height) && ok(self.annotation_height)
    }
}

impl From<(f64, f64)> for ItemMeasurement {
    fn from((primary_height, annotation_height): (f64, f64)) -> Self {
        Self::new(primary_height, annotation_height)
    }
}

/// A placed item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Placement {
    /// Item index as passed to the measurement callback.
    pub index: usize,
    /// Column the item was assigned to.
    pub column: usize,
    /// Visible rectangle: the item's slot inset by the cell padding.
    pub frame: Rect,
    /// Primary content height, so callers can split the frame into content and annotation regions.
    pub primary_height: f64,
}

impl Placement {
    /// Region of the frame occupied by the primary content (top of the frame).
    pub fn primary_rect(&self) -> Rect {
        Rect::new(self.frame.x, self.frame.y, self.frame.w, self.primary_height)
    }
    /// Region of the frame below the primary content.
    pub fn annotation_rect(&self) -> Rect {
        Rect::new(
            self.frame.x,
            self.frame.y + self.primary_height,
            self.frame.w,
            (self.frame.h - self.primary_height).max(0.0),
        )
    }
}

/// Output of one layout pass. Placements are stored in item index order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutResult {
    pub placements: Vec<Placement>,
    pub content_width: f64,
    pub content_height: f64,
    /// Final running offset of every column.
    pub column_heights: Vec<f64>,
}

impl LayoutResult {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.placements.iter()
    }

    /// Placement of a single item, if it exists.
    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }

    /// All placements whose frame intersects `viewport` (closed intervals), in index order.
    pub fn query(&self, viewport: Rect) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(move |p| p.frame.intersects(&viewport))
    }

    pub fn total_size(&self) -> Size {
        Size {
            width: self.content_width,
            height: self.content_height,
        }
    }

    /// Computes layout statistics for this result.
    pub fn stats(&self) -> LayoutStats {
        let used_area: f64 = self.placements.iter().map(|p| p.frame.area()).sum();
        let total_area = self.content_width * self.content_height;
        let fill_ratio = if total_area > 0.0 {
            used_area / total_area
        } else {
            0.0
        };
        let tallest = self.column_heights.iter().cloned().fold(0.0_f64, f64::max);
        let shortest = self
            .column_heights
            .iter()
            .cloned()
            .fold(f64::INFINITY, f64::min);
        let column_imbalance = if self.column_heights.is_empty() {
            0.0
        } else {
            tallest - shortest
        };
        LayoutStats {
            num_items: self.placements.len(),
            num_columns: self.column_heights.len(),
            column_heights: self.column_heights.clone(),
            content_width: self.content_width,
            content_height: self.content_height,
            used_area,
            fill_ratio,
            column_imbalance,
        }
    }
}

impl<'a> IntoIterator for &'a LayoutResult {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

/// Statistics about how well a layout fills its content area.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutStats {
    pub num_items: usize,
    pub num_columns: usize,
    pub column_heights: Vec<f64>,
    pub content_width: f64,
    pub content_height: f64,
    /// Sum of placement frame areas (padding excluded).
    pub used_area: f64,
    /// used_area / (content_width * content_height), 0.0 for an empty layout.
    pub fill_ratio: f64,
    /// Difference between the tallest and the shortest column.
    pub column_imbalance: f64,
}

impl LayoutStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Items: {}, Columns: {}, Size: {:.1}x{:.1}, Fill: {:.2}%, Imbalance: {:.1}",
            self.num_items,
            self.num_columns,
            self.content_width,
            self.content_height,
            self.fill_ratio * 100.0,
            self.column_imbalance,
        )
    }

    /// Area inside the content bounds not covered by any frame.
    pub fn wasted_area(&self) -> f64 {
        (self.content_width * self.content_height - self.used_area).max(0.0)
    }
}
