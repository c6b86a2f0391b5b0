use crate::error::{MasonryError, Result};
use crate::model::ItemMeasurement;
use serde::{Deserialize, Serialize};

/// Reports an item's content heights at a proposed width.
///
/// Called exactly once per item per layout pass, in index order. For the layout to be
/// deterministic the result should depend only on `index` and `width`.
pub trait Measure {
    fn measure(&mut self, index: usize, width: f64) -> ItemMeasurement;
}

impl<F> Measure for F
where
    F: FnMut(usize, f64) -> ItemMeasurement,
{
    fn measure(&mut self, index: usize, width: f64) -> ItemMeasurement {
        self(index, width)
    }
}

/// Static description of an item: a photo plus an annotation block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemSpec {
    #[serde(default)]
    pub key: String,
    /// Intrinsic photo width. When set, the photo is scaled to the proposed width keeping its
    /// aspect ratio.
    #[serde(default)]
    pub photo_width: Option<f64>,
    pub photo_height: f64,
    #[serde(default)]
    pub annotation_height: f64,
}

impl ItemSpec {
    pub fn new(key: impl Into<String>, photo_height: f64, annotation_height: f64) -> Self {
        Self {
            key: key.into(),
            photo_width: None,
            photo_height,
            annotation_height,
        }
    }

    /// A photo of intrinsic size `w x h`, scaled to whatever width the layout proposes.
    pub fn with_aspect(key: impl Into<String>, w: f64, h: f64, annotation_height: f64) -> Self {
        Self {
            key: key.into(),
            photo_width: Some(w),
            photo_height: h,
            annotation_height,
        }
    }

    /// Heights of this item when laid out `width` wide.
    pub fn measure_at(&self, width: f64) -> ItemMeasurement {
        let photo = match self.photo_width {
            Some(w) if w > 0.0 => self.photo_height * width / w,
            _ => self.photo_height,
        };
        ItemMeasurement::new(photo, self.annotation_height)
    }
}

/// Rejects specs that could only produce invalid measurements.
pub fn validate_items(items: &[ItemSpec]) -> Result<()> {
    for (i, it) in items.iter().enumerate() {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if !ok(it.photo_height) || !ok(it.annotation_height) {
            return Err(MasonryError::InvalidInput(format!(
                "item {} ({:?}): heights must be non-negative",
                i, it.key
            )));
        }
        if let Some(w) = it.photo_width {
            if !w.is_finite() || w <= 0.0 {
                return Err(MasonryError::InvalidInput(format!(
                    "item {} ({:?}): photo_width must be positive, got {}",
                    i, it.key, w
                )));
            }
        }
    }
    Ok(())
}

/// Adapts a slice of `ItemSpec` into a `Measure`.
///
/// Indices past the end of the slice measure as zero height, so lay out exactly `len()` items.
#[derive(Debug, Clone, Copy)]
pub struct ItemSpecs<'a>(pub &'a [ItemSpec]);

impl ItemSpecs<'_> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Measure for ItemSpecs<'_> {
    fn measure(&mut self, index: usize, width: f64) -> ItemMeasurement {
        self.0
            .get(index)
            .map(|it| it.measure_at(width))
            .unwrap_or_default()
    }
}
