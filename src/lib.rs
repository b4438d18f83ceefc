#![forbid(unsafe_code)]

//! Rust client for the Terrascope catalogue.
//!
//! Terrascope exposes satellite product metadata over a REST catalogue. This
//! crate covers the product-search flow: express a search as a
//! [`ProductQuery`], run it through [`Client::get_products`], and pull band
//! download paths out of the decoded features with [`get_product_paths`].
//!
//! **Quick start**
//! ```no_run
//! use chrono::NaiveDate;
//! use terrascope_catalogue::{Client, ProductQuery, get_product_paths};
//!
//! let client = Client::default_client()?;
//!
//! let query = ProductQuery::new(
//!     "urn:eop:VITO:TERRASCOPE_S2_TOC_V2",
//!     NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2023, 6, 7).unwrap(),
//! )
//! .tile_id("31UFS");
//!
//! let products = client.get_products(&query)?;
//! for path in get_product_paths(&products, "B04") {
//!     println!("{path}");
//! }
//! # Ok::<(), terrascope_catalogue::Error>(())
//! ```
//!
//! Notes:
//! - One synchronous GET per search; no retries, pagination, or caching.
//! - Band hrefs come back as `file://` URIs pointing at the Terrascope
//!   cluster filesystem; extraction strips that scheme.

mod client;
mod date;
mod error;
mod product;
mod query;

pub use crate::client::{Client, ClientOptions, DEFAULT_CATALOGUE_URL};
pub use crate::date::parse_date;
pub use crate::error::{Error, Result};
pub use crate::product::{
    BandLink, DATA_SCHEME_PREFIX, Feature, ProductLinks, ProductProperties, get_product_paths,
    strip_data_scheme,
};
pub use crate::query::{BoundingBox, ProductQuery};
