use chrono::NaiveDate;

use crate::date::wire_date;

/// Marker sent with every request, same value the Terrascope notebooks send.
pub const ACCESSED_FROM: &str = "MEP";

/// Geographic extent as west, south, east, north (lon/lat degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Comma-joined form the catalogue expects in the `bbox` parameter.
    pub fn to_query_value(&self) -> String {
        format!("{},{},{},{}", self.west, self.south, self.east, self.north)
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(value: [f64; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<(f64, f64, f64, f64)> for BoundingBox {
    fn from(value: (f64, f64, f64, f64)) -> Self {
        Self::new(value.0, value.1, value.2, value.3)
    }
}

/// One product search against the catalogue.
///
/// `start`/`end` are calendar dates; the service treats both as inclusive and
/// expects `start <= end`. That ordering is not checked here, matching the
/// service-side validation contract.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    collection: String,
    start: NaiveDate,
    end: NaiveDate,
    bbox: Option<BoundingBox>,
    tile_id: Option<String>,
}

impl ProductQuery {
    pub fn new(collection: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            collection: collection.into(),
            start,
            end,
            bbox: None,
            tile_id: None,
        }
    }

    /// Restrict the search to a geographic extent.
    pub fn bbox(mut self, bbox: impl Into<BoundingBox>) -> Self {
        self.bbox = Some(bbox.into());
        self
    }

    /// Restrict the search to a single tile, e.g. `"31UFS"`.
    pub fn tile_id(mut self, tile_id: impl Into<String>) -> Self {
        self.tile_id = Some(tile_id.into());
        self
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Key/value pairs for the request query string.
    ///
    /// Optional parameters are omitted entirely when unset, never sent empty.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("collection", self.collection.clone()),
            ("start", wire_date(&self.start)),
            ("end", wire_date(&self.end)),
            ("accessedFrom", ACCESSED_FROM.to_string()),
        ];

        if let Some(bbox) = &self.bbox {
            pairs.push(("bbox", bbox.to_query_value()));
        }
        if let Some(tile_id) = &self.tile_id {
            pairs.push(("tileId", tile_id.clone()));
        }

        pairs
    }
}
