//! Per-paper bibliographic metadata for a hierarchical anthology corpus.
//!
//! A [`Volume`] carries the resolved metadata of a proceedings volume or
//! journal issue. Each [`Paper`] in it is built by selectively inheriting
//! the volume's attributes, overlaying its own, and normalising the result
//! once. Derived fields (identifiers, URLs, formatted titles, language
//! names) are computed lazily and cached, and a paper can be exported as a
//! flat dict or a BibTeX record.

use core::fmt;

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod element_builder;
pub mod entry;
pub mod error;
pub mod formatter;
pub mod input;
pub mod langtags;
pub mod latex;
pub mod output;
pub mod utils;
pub mod volume;

pub use config::Config;
pub use diagnostics::{Diagnostic, Diagnostics};
pub use entry::fields::{Attributes, Field, Link, Value};
pub use entry::name::{Person, PersonName};
pub use entry::names::Role;
pub use entry::{BibType, Paper, ParsedPaper};
pub use error::{Error, LanguageLookupError, Result};
pub use formatter::{Formatter, MarkupFormatter, TextNode};
pub use volume::Volume;

/// Output form of a structured text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Form {
    /// Inline markup unchanged
    Xml,
    /// Tags stripped, whitespace collapsed
    Plain,
    Html,
    /// Markup converted to LaTeX commands, text escaped for BibTeX
    Latex,
}

impl Default for Form {
    fn default() -> Self {
        Self::Xml
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml => f.write_str("xml"),
            Self::Plain => f.write_str("plain"),
            Self::Html => f.write_str("html"),
            Self::Latex => f.write_str("latex"),
        }
    }
}

impl core::str::FromStr for Form {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "xml" => Ok(Self::Xml),
            "plain" => Ok(Self::Plain),
            "html" => Ok(Self::Html),
            "latex" => Ok(Self::Latex),
            _ => Err(anyhow::anyhow!("Incorrect text form")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    BibTeX,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::BibTeX
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BibTeX => f.write_str("bibtex"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl core::str::FromStr for OutputFormat {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "bibtex" => Ok(Self::BibTeX),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Incorrect output format type")),
        }
    }
}
