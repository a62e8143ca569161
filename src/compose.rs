//! Grid-tiled SVG composition.
//!
//! Icons live in a fixed 300×300 tile coordinate space with a 44-unit trim
//! margin. A composite lays tiles out left-to-right, top-to-bottom in input
//! order. The emitted document scales one full tile to 48 display units via
//! its `width`/`height` attributes while the `viewBox` keeps the internal
//! coordinate space, so the image stays crisp at any display size.

use std::num::NonZeroU32;

use miette::Diagnostic;
use thiserror::Error;

/// Internal tile edge length.
pub const TILE_SIZE: u32 = 300;
/// Trim margin subtracted once from each document dimension.
pub const TILE_TRIM: u32 = 44;
/// Displayed size of one full tile.
pub const ICON_SIZE: f64 = 48.0;
/// Uniform display scale applied to both document dimensions.
pub const SCALE: f64 = ICON_SIZE / ((TILE_SIZE - TILE_TRIM) as f64);

#[derive(Debug, Error, Diagnostic)]
pub enum ComposeError {
    #[error("empty composite: cannot lay out zero icons")]
    #[diagnostic(
        code(iconweave::compose::empty),
        help("Provide at least one icon fragment.")
    )]
    Empty,
}

pub type ComposeResult<T> = std::result::Result<T, ComposeError>;

/// One placed icon: translation offset plus the embedded fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile<'a> {
    pub x: u32,
    pub y: u32,
    pub fragment: &'a str,
}

/// A laid-out composite document, ready to serialize.
#[derive(Debug, Clone)]
pub struct Composite<'a> {
    /// Internal (unscaled) width: `min(per_line, n) * 300 - 44`.
    pub view_width: u32,
    /// Internal (unscaled) height: `ceil(n / per_line) * 300 - 44`.
    pub view_height: u32,
    pub tiles: Vec<Tile<'a>>,
}

impl<'a> Composite<'a> {
    /// Lay out fragments in input order, `per_line` tiles per row.
    ///
    /// No sorting, deduplication, or reordering. A `per_line` larger than the
    /// icon count collapses to a single row whose width is driven by the
    /// count, not `per_line`.
    pub fn layout(fragments: &[&'a str], per_line: NonZeroU32) -> ComposeResult<Self> {
        if fragments.is_empty() {
            return Err(ComposeError::Empty);
        }
        let per_line = per_line.get();
        let n = fragments.len() as u32;
        let rows = n.div_ceil(per_line);
        let columns = per_line.min(n);

        let tiles = fragments
            .iter()
            .enumerate()
            .map(|(index, &fragment)| {
                let index = index as u32;
                Tile {
                    x: (index % per_line) * TILE_SIZE,
                    y: (index / per_line) * TILE_SIZE,
                    fragment,
                }
            })
            .collect();

        Ok(Self {
            view_width: columns * TILE_SIZE - TILE_TRIM,
            view_height: rows * TILE_SIZE - TILE_TRIM,
            tiles,
        })
    }

    /// Advisory on-page width (`width` attribute).
    pub fn display_width(&self) -> f64 {
        f64::from(self.view_width) * SCALE
    }

    /// Advisory on-page height (`height` attribute).
    pub fn display_height(&self) -> f64 {
        f64::from(self.view_height) * SCALE
    }

    /// Serialize to a single SVG document, fragments embedded verbatim.
    pub fn to_svg(&self) -> String {
        let body_len: usize = self.tiles.iter().map(|t| t.fragment.len() + 48).sum();
        let mut svg = String::with_capacity(192 + body_len);
        svg.push_str(&format!(
            "<svg width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" fill=\"none\" xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" version=\"1.1\">",
            self.display_width(),
            self.display_height(),
            self.view_width,
            self.view_height,
        ));
        for tile in &self.tiles {
            svg.push_str(&format!(
                "<g transform=\"translate({}, {})\">{}</g>",
                tile.x, tile.y, tile.fragment
            ));
        }
        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_line(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn scale_is_three_sixteenths() {
        assert_eq!(SCALE, 0.1875);
    }

    #[test]
    fn single_icon_sits_at_origin() {
        let composite = Composite::layout(&["<svg>a</svg>"], per_line(15)).unwrap();
        assert_eq!(composite.tiles.len(), 1);
        assert_eq!((composite.tiles[0].x, composite.tiles[0].y), (0, 0));
        assert_eq!(composite.view_width, 256);
        assert_eq!(composite.view_height, 256);
        assert_eq!(composite.display_width(), 48.0);
        assert_eq!(composite.display_height(), 48.0);
    }

    #[test]
    fn two_icons_share_a_row() {
        let composite = Composite::layout(&["<svg>a</svg>", "<svg>b</svg>"], per_line(2)).unwrap();
        assert_eq!((composite.tiles[0].x, composite.tiles[0].y), (0, 0));
        assert_eq!((composite.tiles[1].x, composite.tiles[1].y), (300, 0));
        assert_eq!(composite.view_width, 2 * 300 - 44);
        assert_eq!(composite.view_height, 256);
    }

    #[test]
    fn rows_wrap_at_per_line() {
        let fragments = ["<svg>a</svg>", "<svg>b</svg>", "<svg>c</svg>"];
        let composite = Composite::layout(&fragments, per_line(2)).unwrap();
        assert_eq!((composite.tiles[2].x, composite.tiles[2].y), (0, 300));
        // rows = ceil(3/2) = 2
        assert_eq!(composite.view_height, 2 * 300 - 44);
        assert_eq!(composite.view_width, 2 * 300 - 44);
    }

    #[test]
    fn per_line_beyond_count_collapses_to_one_row() {
        let composite = Composite::layout(&["<svg>a</svg>", "<svg>b</svg>"], per_line(50)).unwrap();
        assert_eq!(composite.view_width, 2 * 300 - 44);
        assert_eq!(composite.view_height, 256);
        assert_eq!((composite.tiles[1].x, composite.tiles[1].y), (300, 0));
    }

    #[test]
    fn height_matches_row_formula() {
        for (n, p, rows) in [(1u32, 1u32, 1u32), (7, 3, 3), (15, 15, 1), (16, 15, 2), (45, 15, 3)] {
            let fragments: Vec<String> = (0..n).map(|i| format!("<svg>{i}</svg>")).collect();
            let refs: Vec<&str> = fragments.iter().map(String::as_str).collect();
            let composite = Composite::layout(&refs, per_line(p)).unwrap();
            assert_eq!(composite.view_height, rows * 300 - 44, "n={n} p={p}");
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            Composite::layout(&[], per_line(15)),
            Err(ComposeError::Empty)
        ));
    }

    #[test]
    fn svg_embeds_fragments_in_order() {
        let composite = Composite::layout(&["<svg>first</svg>", "<svg>second</svg>"], per_line(2))
            .unwrap();
        let svg = composite.to_svg();
        assert!(svg.starts_with(
            "<svg width=\"104.25\" height=\"48\" viewBox=\"0 0 556 256\" fill=\"none\""
        ));
        assert!(svg.ends_with("</svg>"));
        let first = svg.find("first").unwrap();
        let second = svg.find("second").unwrap();
        assert!(first < second);
        assert!(svg.contains("<g transform=\"translate(0, 0)\"><svg>first</svg></g>"));
        assert!(svg.contains("<g transform=\"translate(300, 0)\"><svg>second</svg></g>"));
    }
}
