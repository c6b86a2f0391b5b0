use crate::config::{ColumnStrategy, LayoutParameters};
use crate::model::{LayoutResult, Placement};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Layout-level metadata written next to the placements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Schema version of the JSON output; bumped on breaking changes.
    pub schema_version: String,
    pub app: String,
    pub version: String,
    pub column_count: u32,
    pub cell_padding: f64,
    pub content_width: f64,
    pub strategy: ColumnStrategy,
}

impl Meta {
    pub fn for_params(params: &LayoutParameters) -> Self {
        Self {
            schema_version: "1".into(),
            app: "masonry-grid".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            column_count: params.column_count,
            cell_padding: params.cell_padding,
            content_width: params.content_width,
            strategy: params.strategy,
        }
    }
}

fn placement_json(p: &Placement) -> Value {
    json!({
        "index": p.index,
        "column": p.column,
        "frame": {"x": p.frame.x, "y": p.frame.y, "w": p.frame.w, "h": p.frame.h},
        "primaryHeight": p.primary_height,
    })
}

/// Serialize a layout as `{ items: [...], size: {w, h}, meta }` with items in index order.
pub fn to_json(result: &LayoutResult, meta: &Meta) -> Value {
    let items: Vec<Value> = result.placements.iter().map(placement_json).collect();
    json!({
        "items": items,
        "size": {"w": result.content_width, "h": result.content_height},
        "meta": meta,
    })
}

/// Items keyed by caller-supplied names: `{ items: { key: {...} }, size, meta }`.
/// Placements without a matching key fall back to their index as the key. A key already taken
/// by an earlier item gets `#<index>` appended, so every placement keeps its own entry.
pub fn to_json_keyed<K: ToString>(result: &LayoutResult, keys: &[K], meta: &Meta) -> Value {
    let mut items = serde_json::Map::new();
    for p in &result.placements {
        let mut key = keys
            .get(p.index)
            .map(|k| k.to_string())
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| p.index.to_string());
        while items.contains_key(&key) {
            key = format!("{}#{}", key, p.index);
        }
        items.insert(key, placement_json(p));
    }
    json!({
        "items": items,
        "size": {"w": result.content_width, "h": result.content_height},
        "meta": meta,
    })
}
