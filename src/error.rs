//! Top-level error type for iconweave.
//!
//! Each module defines its own error enum with miette `#[diagnostic]` derives
//! (error codes and help text); this wrapper preserves the full diagnostic
//! chain through to the user.

use miette::Diagnostic;
use thiserror::Error;

use crate::alias::ResolveError;
use crate::compose::ComposeError;
use crate::dataset::DatasetError;
use crate::query::QueryError;

#[derive(Debug, Error, Diagnostic)]
pub enum IconweaveError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Query(#[from] QueryError),
}

pub type IconweaveResult<T> = std::result::Result<T, IconweaveError>;
