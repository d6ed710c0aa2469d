//! Error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A language code is present on a paper but the code table does not know it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code '{code}'")]
pub struct LanguageLookupError {
  pub code: String,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  LanguageLookup(#[from] LanguageLookupError),

  #[error("malformed XML: {0}")]
  Xml(#[from] roxmltree::Error),

  #[error("<{parent}> has no <{element}> element")]
  MissingElement { parent: String, element: String },

  #[error("<{element}> has no '{attribute}' attribute")]
  MissingAttribute { element: String, attribute: String },

  #[error("JSON output: {0}")]
  Json(#[from] serde_json::Error),

  #[error("configuration: {0}")]
  Config(String),

  #[error(transparent)]
  Io(#[from] std::io::Error),
}
