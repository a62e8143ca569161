//! End-to-end tests for the iconweave library pipeline.
//!
//! These exercise the full path from dataset loading through alias
//! resolution, grid layout, and SVG serialization, validating that the
//! modules work together the way the HTTP surface uses them.

use std::num::NonZeroU32;

use iconweave::alias::{Resolver, Theme};
use iconweave::compose::Composite;
use iconweave::dataset::IconSet;
use iconweave::query::{self, IconParams};

fn bundled() -> IconSet {
    IconSet::bundled().unwrap()
}

fn params(i: &str, theme: Option<&str>, perline: Option<&str>) -> IconParams {
    IconParams {
        i: Some(i.to_string()),
        t: theme.map(str::to_string),
        perline: perline.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn load_external_dataset_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("icons.json");
    let source = r#"{"alpha":"<svg>a</svg>","beta-dark":"<svg>bd</svg>","beta-light":"<svg>bl</svg>"}"#;
    std::fs::write(&path, source).unwrap();

    let icons = IconSet::load(&path).unwrap();
    assert_eq!(icons.raw_json(), source);
    let names: Vec<&str> = icons.base_names().iter().map(String::as_str).collect();
    assert_eq!(names, ["alpha", "beta"]);
    assert!(icons.is_themed("beta"));

    let svg = query::render_svg(&icons, &params("alpha,beta", Some("dark"), None)).unwrap();
    assert!(svg.contains("<svg>a</svg>"));
    assert!(svg.contains("<svg>bd</svg>"));
}

#[test]
fn resolve_then_compose_matches_pipeline_output() {
    let icons = bundled();
    let resolver = Resolver::new(&icons);

    let keys = resolver
        .resolve_all(&["javascript", "python"], Some(Theme::Dark))
        .unwrap();
    let fragments: Vec<&str> = keys.iter().map(|k| icons.fragment(k).unwrap()).collect();
    let composite = Composite::layout(&fragments, NonZeroU32::new(2).unwrap()).unwrap();

    assert_eq!(composite.view_width, 2 * 300 - 44);
    assert_eq!(composite.view_height, 256);
    assert_eq!((composite.tiles[0].x, composite.tiles[0].y), (0, 0));
    assert_eq!((composite.tiles[1].x, composite.tiles[1].y), (300, 0));

    // The query pipeline produces the same bytes for the same request.
    let via_query = query::render_svg(
        &icons,
        &params("javascript,python", Some("dark"), Some("2")),
    )
    .unwrap();
    assert_eq!(via_query, composite.to_svg());
}

#[test]
fn single_icon_via_alias() {
    let icons = bundled();
    let svg = query::render_svg(&icons, &params("k8s", None, None)).unwrap();
    assert_eq!(svg.matches("<g transform=").count(), 1);
    assert!(svg.contains("<g transform=\"translate(0, 0)\">"));
    assert!(svg.contains("viewBox=\"0 0 256 256\""));
}

#[test]
fn all_expansion_breaks_rows_every_fifteen() {
    let icons = bundled();
    let svg = query::render_svg(&icons, &params("all", Some("dark"), Some("15"))).unwrap();

    let names = icons.base_names().len();
    assert_eq!(svg.matches("<g transform=").count(), names);
    // The bundled dataset has more than 15 base names, so a second row starts
    // at tile index 15.
    assert!(names > 15);
    assert!(svg.contains("<g transform=\"translate(0, 300)\">"));
    let rows = names.div_ceil(15) as u32;
    assert!(svg.contains(&format!("viewBox=\"0 0 {} {}\"", 15 * 300 - 44, rows * 300 - 44)));
}

#[test]
fn error_messages_are_the_endpoint_contract() {
    let icons = bundled();

    let err = query::render_svg(&icons, &IconParams::default()).unwrap_err();
    assert_eq!(err.to_string(), "You didn't specify any icons!");

    let err = query::render_svg(&icons, &params("bogus-name-xyz", None, None)).unwrap_err();
    assert_eq!(err.to_string(), "You didn't format the icons param correctly!");

    let err = query::render_svg(&icons, &params("rust", Some("blue"), None)).unwrap_err();
    assert_eq!(err.to_string(), "Theme must be either \"light\" or \"dark\"");

    let err = query::render_svg(&icons, &params("rust", None, Some("999"))).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Icons per line must be a number between 1 and 50"
    );
}

#[test]
fn themed_icon_without_theme_fails_whole_batch() {
    let icons = bundled();
    // rust alone is fine; adding react without a theme poisons the request.
    assert!(query::render_svg(&icons, &params("rust", None, None)).is_ok());
    assert!(query::render_svg(&icons, &params("rust,react", None, None)).is_err());
    assert!(query::render_svg(&icons, &params("rust,react", Some("light"), None)).is_ok());
}
