//! The icon dataset: an immutable mapping from icon key to SVG fragment.
//!
//! Loaded once per process, either from the bundled artifact or from an
//! external JSON file. Two sets are derived at load time: the canonical base
//! names (keys with any `-light`/`-dark` suffix stripped, in dataset key
//! order) and the themed names (bases that carry at least one theme variant).
//! The raw source text is retained so `/api/svgs` can serve it verbatim.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

/// Theme variant suffixes recognized on dataset keys.
const THEME_SUFFIXES: [&str; 2] = ["-light", "-dark"];

/// Compact dataset artifact embedded into the binary.
const BUNDLED_JSON: &str = include_str!("../data/icons.json");

#[derive(Debug, Error, Diagnostic)]
pub enum DatasetError {
    #[error("failed to read dataset file: {path}")]
    #[diagnostic(
        code(iconweave::dataset::io),
        help("Ensure the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset JSON: {message}")]
    #[diagnostic(
        code(iconweave::dataset::parse),
        help("The dataset must be a single JSON object mapping icon keys to SVG fragment strings.")
    )]
    Parse { message: String },

    #[error("dataset value for \"{key}\" is not a string")]
    #[diagnostic(
        code(iconweave::dataset::fragment_type),
        help("Every dataset value must be an SVG fragment string.")
    )]
    FragmentType { key: String },

    #[error("dataset contains no icons")]
    #[diagnostic(
        code(iconweave::dataset::empty),
        help("Point ICONWEAVE_DATASET / --dataset at a non-empty artifact.")
    )]
    Empty,
}

pub type DatasetResult<T> = std::result::Result<T, DatasetError>;

/// The loaded icon dataset. Immutable for the lifetime of the process.
pub struct IconSet {
    raw_json: String,
    fragments: HashMap<String, String>,
    base_names: Vec<String>,
    base_set: HashSet<String>,
    themed: HashSet<String>,
}

impl IconSet {
    /// Parse a dataset from its JSON source text.
    ///
    /// Key order in the source defines the canonical name order, so the
    /// object is parsed order-preserving.
    pub fn from_json(json: &str) -> DatasetResult<Self> {
        let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| DatasetError::Parse {
                message: e.to_string(),
            })?;
        if entries.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut fragments = HashMap::with_capacity(entries.len());
        let mut base_names = Vec::new();
        let mut base_set = HashSet::new();
        let mut themed = HashSet::new();

        for (key, value) in entries {
            let serde_json::Value::String(fragment) = value else {
                return Err(DatasetError::FragmentType { key });
            };
            let (base, is_variant) = split_theme_suffix(&key);
            if is_variant {
                themed.insert(base.to_string());
            }
            if base_set.insert(base.to_string()) {
                base_names.push(base.to_string());
            }
            fragments.insert(key, fragment);
        }

        Ok(Self {
            raw_json: json.to_string(),
            fragments,
            base_names,
            base_set,
            themed,
        })
    }

    /// The dataset bundled into the binary.
    pub fn bundled() -> DatasetResult<Self> {
        Self::from_json(BUNDLED_JSON)
    }

    /// Load a dataset from an external JSON file.
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Raw source text, served byte-for-byte at `/api/svgs`.
    pub fn raw_json(&self) -> &str {
        &self.raw_json
    }

    /// Number of dataset keys (theme variants counted separately).
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragment for an exact dataset key.
    pub fn fragment(&self, key: &str) -> Option<&str> {
        self.fragments.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fragments.contains_key(key)
    }

    /// Whether `name` is a canonical base name.
    pub fn is_canonical(&self, name: &str) -> bool {
        self.base_set.contains(name)
    }

    /// Whether `name` has light/dark variants and therefore needs a theme
    /// suffix to resolve to a concrete key.
    pub fn is_themed(&self, name: &str) -> bool {
        self.themed.contains(name)
    }

    /// Canonical base names, deduplicated, in dataset key order.
    pub fn base_names(&self) -> &[String] {
        &self.base_names
    }
}

/// Strip a trailing theme suffix, reporting whether one was present.
fn split_theme_suffix(key: &str) -> (&str, bool) {
    for suffix in THEME_SUFFIXES {
        if let Some(base) = key.strip_suffix(suffix) {
            return (base, true);
        }
    }
    (key, false)
}
