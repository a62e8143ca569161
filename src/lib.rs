//! # iconweave
//!
//! Serves pre-rendered SVG icon fragments from a static dataset and composes
//! any subset of them into a single grid-tiled SVG on demand.
//!
//! ## Architecture
//!
//! - **Dataset** (`dataset`): immutable key → fragment map with derived
//!   canonical and themed name sets, loaded once per process
//! - **Alias resolution** (`alias`): short names → canonical dataset keys,
//!   with light/dark suffix injection for themed icons
//! - **Composition** (`compose`): grid layout over fixed 300×300 tiles with a
//!   44-unit trim and a 0.1875 display scale
//! - **Query pipeline** (`query`): fail-fast parameter validation for the
//!   `/icon` endpoint
//! - **HTTP surface** (`server`): axum router used by the `iconweaved` daemon
//!
//! ## Library usage
//!
//! ```
//! use iconweave::dataset::IconSet;
//! use iconweave::query::{IconParams, render_svg};
//!
//! let icons = IconSet::bundled().unwrap();
//! let params = IconParams {
//!     i: Some("rust,golang".to_string()),
//!     ..Default::default()
//! };
//! let svg = render_svg(&icons, &params).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod alias;
pub mod compose;
pub mod dataset;
pub mod error;
pub mod query;
pub mod server;
