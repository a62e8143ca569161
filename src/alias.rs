//! Short-name aliases and canonical key resolution.
//!
//! User-supplied names resolve in three steps: canonical base names pass
//! through, known aliases map to their canonical base, and themed bases get
//! the light/dark suffix appended. The final key must exist in the dataset.
//! Resolution is a pure function over the dataset and the static alias table.

use std::collections::HashMap;
use std::sync::OnceLock;

use miette::Diagnostic;
use thiserror::Error;

use crate::dataset::IconSet;

/// Light/dark variant selector for themed icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse the query-parameter form. Only the exact strings `light` and
    /// `dark` are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Dataset key suffix for this theme.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Light => "-light",
            Self::Dark => "-dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Static synonym table: short alias → canonical base name.
static ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("tailwind", "tailwindcss"),
    ("vue", "vuejs"),
    ("nuxt", "nuxtjs"),
    ("go", "golang"),
    ("cf", "cloudflare"),
    ("wasm", "webassembly"),
    ("postgres", "postgresql"),
    ("k8s", "kubernetes"),
    ("next", "nextjs"),
    ("mongo", "mongodb"),
    ("md", "markdown"),
    ("ps", "photoshop"),
    ("ai", "illustrator"),
    ("pr", "premiere"),
    ("ae", "aftereffects"),
    ("scss", "sass"),
    ("sc", "scala"),
    ("net", "dotnet"),
    ("gatsbyjs", "gatsby"),
    ("gql", "graphql"),
    ("vlang", "v"),
    ("amazonwebservices", "aws"),
    ("bots", "discordbots"),
    ("express", "expressjs"),
    ("googlecloud", "gcp"),
    ("mui", "materialui"),
    ("windi", "windicss"),
    ("unreal", "unrealengine"),
    ("nest", "nestjs"),
    ("ktorio", "ktor"),
    ("pwsh", "powershell"),
    ("au", "audition"),
    ("rollup", "rollupjs"),
    ("rxjs", "reactivex"),
    ("rxjava", "reactivex"),
    ("ghactions", "githubactions"),
];

fn alias_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| ALIASES.iter().copied().collect())
}

#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    #[error("unknown icon name: \"{name}\"")]
    #[diagnostic(
        code(iconweave::resolve::unknown_name),
        help("List canonical names with `iconweave names` or GET /api/icons.")
    )]
    UnknownName { name: String },

    #[error("icon \"{name}\" has light/dark variants; a theme is required")]
    #[diagnostic(
        code(iconweave::resolve::theme_required),
        help("Pass `t=light` or `t=dark` (CLI: `--theme`).")
    )]
    ThemeRequired { name: String },

    #[error("resolved key \"{key}\" is not in the dataset")]
    #[diagnostic(
        code(iconweave::resolve::missing_key),
        help("The dataset carries only some variants of this icon; try the other theme.")
    )]
    MissingKey { key: String },
}

pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Resolves user-supplied name tokens against a dataset.
pub struct Resolver<'a> {
    icons: &'a IconSet,
}

impl<'a> Resolver<'a> {
    pub fn new(icons: &'a IconSet) -> Self {
        Self { icons }
    }

    /// Resolve one token to a canonical dataset key.
    pub fn resolve(&self, name: &str, theme: Option<Theme>) -> ResolveResult<String> {
        let base = if self.icons.is_canonical(name) {
            name
        } else {
            alias_table()
                .get(name)
                .copied()
                .ok_or_else(|| ResolveError::UnknownName {
                    name: name.to_string(),
                })?
        };

        let key = if self.icons.is_themed(base) {
            let theme = theme.ok_or_else(|| ResolveError::ThemeRequired {
                name: base.to_string(),
            })?;
            format!("{base}{}", theme.suffix())
        } else {
            base.to_string()
        };

        if !self.icons.contains_key(&key) {
            return Err(ResolveError::MissingKey { key });
        }
        Ok(key)
    }

    /// Resolve a batch, order preserved. The first failing token fails the
    /// whole batch; there are no partial results.
    pub fn resolve_all(&self, names: &[&str], theme: Option<Theme>) -> ResolveResult<Vec<String>> {
        names.iter().map(|name| self.resolve(name, theme)).collect()
    }
}
