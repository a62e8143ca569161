//! iconweave CLI: offline name resolution and SVG composition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use iconweave::alias::{Resolver, Theme};
use iconweave::dataset::IconSet;
use iconweave::error::IconweaveResult;
use iconweave::query::{self, IconParams, QueryError};

#[derive(Parser)]
#[command(name = "iconweave", version, about = "Grid-tiled SVG icon composition")]
struct Cli {
    /// Dataset JSON to use instead of the bundled artifact.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every canonical base name in the dataset.
    Names,

    /// Resolve names and aliases to canonical dataset keys.
    Resolve {
        /// Comma-separated names or aliases (e.g. "js,k8s").
        names: String,

        /// Theme for icons with light/dark variants.
        #[arg(long)]
        theme: Option<String>,
    },

    /// Compose icons into a single SVG document.
    Compose {
        /// Comma-separated names, or "all".
        names: String,

        /// Theme for icons with light/dark variants.
        #[arg(long)]
        theme: Option<String>,

        /// Tiles per row (1-50, default 15).
        #[arg(long)]
        per_line: Option<u32>,

        /// Write to a file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn open_dataset(dataset: Option<&PathBuf>) -> IconweaveResult<IconSet> {
    let icons = match dataset {
        Some(path) => IconSet::load(path)?,
        None => IconSet::bundled()?,
    };
    Ok(icons)
}

fn parse_theme(raw: Option<&str>) -> Result<Option<Theme>> {
    match raw {
        None => Ok(None),
        Some(raw) => Theme::parse(raw)
            .map(Some)
            .ok_or_else(|| QueryError::InvalidTheme.into()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let icons = open_dataset(cli.dataset.as_ref())?;

    match cli.command {
        Commands::Names => {
            for name in icons.base_names() {
                println!("{name}");
            }
        }
        Commands::Resolve { names, theme } => {
            let theme = parse_theme(theme.as_deref())?;
            let tokens: Vec<&str> = names.split(',').collect();
            for key in Resolver::new(&icons).resolve_all(&tokens, theme)? {
                println!("{key}");
            }
        }
        Commands::Compose {
            names,
            theme,
            per_line,
            output,
        } => {
            let params = IconParams {
                i: Some(names),
                t: theme,
                perline: per_line.map(|n| n.to_string()),
                ..Default::default()
            };
            let svg = query::render_svg(&icons, &params)?;
            match output {
                Some(path) => std::fs::write(&path, svg).into_diagnostic()?,
                None => println!("{svg}"),
            }
        }
    }

    Ok(())
}
