use serde::Deserialize;
use serde_json::{Map, Value};

/// Scheme prefix the catalogue puts in front of on-cluster data paths.
pub const DATA_SCHEME_PREFIX: &str = "file://";

/// Top-level search envelope. Only `features` is interpreted; a response
/// without it is a decode failure, not an empty result.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub features: Vec<Feature>,
}

/// One product record from the catalogue.
///
/// Decoding is intentionally loose: the client only names the fields it
/// walks, and everything else the service returns stays available through
/// the flattened maps.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: ProductProperties,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductProperties {
    #[serde(default)]
    pub links: ProductLinks,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductLinks {
    /// Band download links. A product without any contributes no paths.
    #[serde(default)]
    pub data: Vec<BandLink>,
}

/// One band download entry: `title` names the band, `href` locates the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BandLink {
    pub title: String,
    pub href: String,
}

/// Strip the known data scheme from an href.
///
/// Hrefs that do not carry the prefix (e.g. relative paths) are returned
/// unchanged rather than truncated.
pub fn strip_data_scheme(href: &str) -> &str {
    href.strip_prefix(DATA_SCHEME_PREFIX).unwrap_or(href)
}

/// Collect the download paths of one band across a product list.
///
/// Order follows the input: products first, then each product's band links.
/// Products without a matching band title contribute nothing.
pub fn get_product_paths(products: &[Feature], band_name: &str) -> Vec<String> {
    let mut paths = Vec::new();
    for product in products {
        for band in &product.properties.links.data {
            if band.title == band_name {
                paths.push(strip_data_scheme(&band.href).to_string());
            }
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(body: &str) -> Vec<Feature> {
        serde_json::from_str::<SearchResponse>(body).unwrap().features
    }

    #[test]
    fn extracts_matching_band_path() {
        let products = features(
            r#"{"features": [{"properties": {"links": {"data": [
                {"title": "B04", "href": "file://x/y.tif"}
            ]}}}]}"#,
        );
        assert_eq!(get_product_paths(&products, "B04"), vec!["x/y.tif"]);
    }

    #[test]
    fn skips_non_matching_features_keeping_order() {
        let products = features(
            r#"{"features": [
                {"properties": {"links": {"data": [{"title": "B8A", "href": "file://a/b8a.tif"}]}}},
                {"properties": {"links": {"data": [
                    {"title": "B04", "href": "file://a/b04.tif"},
                    {"title": "B04", "href": "file://b/b04.tif"}
                ]}}}
            ]}"#,
        );
        assert_eq!(
            get_product_paths(&products, "B04"),
            vec!["a/b04.tif", "b/b04.tif"]
        );
    }

    #[test]
    fn empty_product_list_yields_no_paths() {
        assert!(get_product_paths(&[], "B04").is_empty());
    }

    #[test]
    fn feature_without_links_contributes_nothing() {
        let products = features(r#"{"features": [{"properties": {}}, {"id": "bare"}]}"#);
        assert!(get_product_paths(&products, "B04").is_empty());
    }

    #[test]
    fn unprefixed_href_passes_through() {
        assert_eq!(strip_data_scheme("relative/path.tif"), "relative/path.tif");
        assert_eq!(strip_data_scheme("file://data/p.tif"), "data/p.tif");
    }

    #[test]
    fn missing_features_key_is_a_decode_error() {
        assert!(serde_json::from_str::<SearchResponse>(r#"{"hits": []}"#).is_err());
    }

    #[test]
    fn undeclared_fields_survive_decoding() {
        let products = features(
            r#"{"features": [{"id": "S2B_20230601", "properties": {
                "acquisitionDate": "2023-06-01",
                "links": {"data": [{"title": "B04", "href": "file://x.tif"}]}
            }}]}"#,
        );
        assert_eq!(
            products[0].extra.get("id").and_then(Value::as_str),
            Some("S2B_20230601")
        );
        assert_eq!(
            products[0]
                .properties
                .extra
                .get("acquisitionDate")
                .and_then(Value::as_str),
            Some("2023-06-01")
        );
    }
}
