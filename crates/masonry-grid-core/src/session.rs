use crate::config::LayoutParameters;
use crate::error::Result;
use crate::measure::Measure;
use crate::model::{LayoutResult, Placement, Rect, Size};
use crate::pipeline::compute_layout;
use tracing::debug;

/// Stateful layout engine that owns its measurement callback and caches the last layout.
///
/// The session is either unprepared (no cached layout) or prepared. Changing the parameters or
/// the item count drops the cache; the next `prepare`, `query` or `total_size` recomputes the
/// whole layout.
pub struct LayoutSession<M> {
    params: LayoutParameters,
    item_count: usize,
    measure: M,
    cache: Option<LayoutResult>,
}

impl<M: Measure> LayoutSession<M> {
    pub fn new(params: LayoutParameters, item_count: usize, measure: M) -> Self {
        Self {
            params,
            item_count,
            measure,
            cache: None,
        }
    }

    pub fn parameters(&self) -> &LayoutParameters {
        &self.params
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_prepared(&self) -> bool {
        self.cache.is_some()
    }

    /// Cached layout, if prepared. Never triggers a layout pass.
    pub fn cached(&self) -> Option<&LayoutResult> {
        self.cache.as_ref()
    }

    /// Replaces the parameters; drops the cached layout if they differ.
    pub fn set_parameters(&mut self, params: LayoutParameters) {
        if params != self.params {
            self.params = params;
            self.invalidate();
        }
    }

    /// Updates the content width, e.g. after the container was resized.
    pub fn set_content_width(&mut self, content_width: f64) {
        if content_width != self.params.content_width {
            self.params.content_width = content_width;
            self.invalidate();
        }
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        if item_count != self.item_count {
            self.item_count = item_count;
            self.invalidate();
        }
    }

    /// Drops the cached layout. Use after the data behind the callback changed.
    pub fn invalidate(&mut self) {
        if self.cache.take().is_some() {
            debug!("layout invalidated");
        }
    }

    /// Mutable access to the callback. Callers changing what it reports must `invalidate`.
    pub fn measure_mut(&mut self) -> &mut M {
        &mut self.measure
    }

    /// Returns the cached layout, computing it first if the session is unprepared.
    pub fn prepare(&mut self) -> Result<&LayoutResult> {
        let result = match self.cache.take() {
            Some(r) => r,
            None => compute_layout(self.item_count, &self.params, &mut self.measure)?,
        };
        let cached: &LayoutResult = self.cache.insert(result);
        Ok(cached)
    }

    /// Recomputes the layout even when prepared. On failure the previous layout is kept.
    pub fn force_prepare(&mut self) -> Result<&LayoutResult> {
        let result = compute_layout(self.item_count, &self.params, &mut self.measure)?;
        let cached: &LayoutResult = self.cache.insert(result);
        Ok(cached)
    }

    /// Placements intersecting `viewport`, preparing the layout if needed.
    pub fn query(&mut self, viewport: Rect) -> Result<impl Iterator<Item = &Placement>> {
        Ok(self.prepare()?.query(viewport))
    }

    /// Placement of a single item, preparing the layout if needed.
    pub fn placement(&mut self, index: usize) -> Result<Option<&Placement>> {
        Ok(self.prepare()?.get(index))
    }

    pub fn total_size(&mut self) -> Result<Size> {
        Ok(self.prepare()?.total_size())
    }

    pub fn into_result(self) -> Option<LayoutResult> {
        self.cache
    }
}
