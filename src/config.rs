//! Configuration items shared by every volume and paper of a run
//!
//! Options come from hard-coded defaults, then an optional configuration
//! file, then the command line. The file is XML with one element per
//! option:
//!
//! ```xml
//! <config>
//!   <pdf_location_template>https://mirror.example.org/{}.pdf</pdf_location_template>
//!   <isbn_normalise>1</isbn_normalise>
//! </config>
//! ```

use std::path::Path;

use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle};
use log::{debug, warn};

use crate::constants::{
  ATTACHMENT_TEMPLATE, CANONICAL_URL_TEMPLATE, PDF_LOCATION_TEMPLATE, PDF_THUMBNAIL_LOCATION_TEMPLATE,
};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
  pub canonical_url_template: String,
  pub pdf_location_template: String,
  pub pdf_thumbnail_template: String,
  pub attachment_template: String,
  /// Re-hyphenate valid ISBNs in BibTeX output
  pub isbn_normalise: bool,
  /// Leave abstracts out of BibTeX output
  pub concise: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      canonical_url_template: CANONICAL_URL_TEMPLATE.into(),
      pdf_location_template: PDF_LOCATION_TEMPLATE.into(),
      pdf_thumbnail_template: PDF_THUMBNAIL_LOCATION_TEMPLATE.into(),
      attachment_template: ATTACHMENT_TEMPLATE.into(),
      isbn_normalise: false,
      concise: false,
    }
  }
}

fn parse_bool(option: &str, value: &str) -> Result<bool> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" => Ok(true),
    "0" | "false" | "no" => Ok(false),
    other => Err(Error::Config(format!("option '{option}' expects a boolean, got '{other}'"))),
  }
}

fn check_template(option: &str, value: &str) -> Result<String> {
  if !value.contains("{}") {
    return Err(Error::Config(format!(
      "template '{option}' has no '{{}}' placeholder: '{value}'"
    )));
  }
  Ok(value.trim().to_string())
}

impl Config {
  /// Set an option by name. Returns `false` for names which are not
  /// options.
  pub fn set_option(&mut self, name: &str, value: &str) -> Result<bool> {
    match name {
      "canonical_url_template" => self.canonical_url_template = check_template(name, value)?,
      "pdf_location_template" => self.pdf_location_template = check_template(name, value)?,
      "pdf_thumbnail_template" => self.pdf_thumbnail_template = check_template(name, value)?,
      "attachment_template" => self.attachment_template = check_template(name, value)?,
      "isbn_normalise" => self.isbn_normalise = parse_bool(name, value)?,
      "concise" => self.concise = parse_bool(name, value)?,
      _ => return Ok(false),
    }
    debug!("Set option '{}' to '{}'", name, value.trim());
    Ok(true)
  }

  /// Defaults overridden by the options of a configuration document
  pub fn from_xml(text: &str) -> Result<Self> {
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();
    if root.tag_name().name() != "config" {
      return Err(Error::Config(format!(
        "root element must be <config>, found <{}>",
        root.tag_name().name()
      )));
    }
    let mut config = Self::default();
    for option in root.children().filter(|n| n.is_element()) {
      let name = option.tag_name().name();
      if !config.set_option(name, option.text().unwrap_or(""))? {
        warn!("Ignoring unknown configuration option '{}'", name);
      }
    }
    Ok(config)
  }

  pub fn from_file(path: &Path) -> Result<Self> {
    debug!("Reading configuration file '{}'", path.display());
    let text = std::fs::read_to_string(path)?;
    Self::from_xml(&text)
  }
}

/// Start logging to stderr, and also to `logfile` if one is given. The
/// returned handle must be kept alive for as long as logging is needed.
pub fn init_logging(level: &str, logfile: Option<&Path>) -> anyhow::Result<LoggerHandle> {
  let logger = Logger::try_with_str(level)?.format(flexi_logger::default_format);
  let logger = match logfile {
    Some(path) => logger
      .log_to_file(FileSpec::try_from(path)?)
      .duplicate_to_stderr(Duplicate::All),
    None => logger.log_to_stderr(),
  };
  Ok(logger.start()?)
}
