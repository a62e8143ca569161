//! Query-parameter validation pipeline for the `/icon` endpoint.
//!
//! A flat, fail-fast pipeline: the first failing check wins and becomes the
//! whole response. Selector presence is checked before theme validity, theme
//! before `perline`, and name resolution runs last. `Display` on
//! [`QueryError`] is exactly the plain-text body the endpoint returns.

use std::num::NonZeroU32;

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

use crate::alias::{ResolveError, Resolver, Theme};
use crate::compose::Composite;
use crate::dataset::IconSet;

/// Tiles per row when `perline` is absent.
pub const DEFAULT_PER_LINE: NonZeroU32 = NonZeroU32::new(15).unwrap();
/// Upper bound for `perline`.
pub const MAX_PER_LINE: u32 = 50;

/// Raw query parameters of the `/icon` endpoint. `i` wins over `icons`,
/// `t` over `theme`; an empty value counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct IconParams {
    pub i: Option<String>,
    pub icons: Option<String>,
    pub t: Option<String>,
    pub theme: Option<String>,
    pub perline: Option<String>,
}

#[derive(Debug, Error, Diagnostic)]
pub enum QueryError {
    #[error("You didn't specify any icons!")]
    #[diagnostic(
        code(iconweave::query::missing_icons),
        help("Pass `i=rust,python` (or `icons=`), or `i=all` for every icon.")
    )]
    MissingIcons,

    #[error("Theme must be either \"light\" or \"dark\"")]
    #[diagnostic(
        code(iconweave::query::invalid_theme),
        help("Valid values for `t`/`theme` are `light` and `dark`.")
    )]
    InvalidTheme,

    #[error("Icons per line must be a number between 1 and 50")]
    #[diagnostic(
        code(iconweave::query::per_line),
        help("`perline` accepts integers from 1 to 50; omit it for the default of 15.")
    )]
    PerLineOutOfRange,

    #[error("You didn't format the icons param correctly!")]
    #[diagnostic(code(iconweave::query::unresolved))]
    Unresolvable {
        #[source]
        #[diagnostic_source]
        source: ResolveError,
    },
}

/// A validated layout request: canonical keys in request order plus the
/// tiles-per-row count.
#[derive(Debug, Clone)]
pub struct IconRequest {
    pub keys: Vec<String>,
    pub per_line: NonZeroU32,
}

fn present(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|s| !s.is_empty())
}

/// Validate raw parameters into an [`IconRequest`], first failure wins.
pub fn build_request(icons: &IconSet, params: &IconParams) -> Result<IconRequest, QueryError> {
    let selector = present(&params.i)
        .or_else(|| present(&params.icons))
        .ok_or(QueryError::MissingIcons)?;

    let theme = match present(&params.t).or_else(|| present(&params.theme)) {
        None => None,
        Some(raw) => Some(Theme::parse(raw).ok_or(QueryError::InvalidTheme)?),
    };

    let per_line = match present(&params.perline) {
        None => DEFAULT_PER_LINE,
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .filter(|n| n.get() <= MAX_PER_LINE)
            .ok_or(QueryError::PerLineOutOfRange)?,
    };

    let tokens: Vec<&str> = if selector == "all" {
        icons.base_names().iter().map(String::as_str).collect()
    } else {
        selector.split(',').collect()
    };

    let keys = Resolver::new(icons)
        .resolve_all(&tokens, theme)
        .map_err(|source| QueryError::Unresolvable { source })?;

    Ok(IconRequest { keys, per_line })
}

/// Run the full pipeline: validate parameters, resolve names, lay out the
/// grid, and serialize the composite document.
pub fn render_svg(icons: &IconSet, params: &IconParams) -> Result<String, QueryError> {
    let request = build_request(icons, params)?;

    let mut fragments = Vec::with_capacity(request.keys.len());
    for key in &request.keys {
        // resolve_all verified every key, so a miss here is an invariant breach
        let fragment = icons
            .fragment(key)
            .ok_or_else(|| QueryError::Unresolvable {
                source: ResolveError::MissingKey { key: key.clone() },
            })?;
        fragments.push(fragment);
    }

    let composite =
        Composite::layout(&fragments, request.per_line).map_err(|_| QueryError::MissingIcons)?;
    Ok(composite.to_svg())
}
