//! `Volume` objects: the resolved parent of a set of papers

use std::sync::Arc;

use crate::config::Config;
use crate::entry::fields::{Attributes, Field, Value};
use crate::formatter::Formatter;
use crate::utils::{build_anthology_id, is_journal};
use crate::Form;

/// A proceedings volume or journal issue. Its attributes are complete
/// before any of its papers is built and never change afterwards.
pub struct Volume {
  collection_id: String,
  volume_id: String,
  ingest_date: Option<String>,
  attrib: Attributes,
  config: Arc<Config>,
  formatter: Arc<dyn Formatter>,
}

impl Volume {
  pub fn new(
    collection_id: &str,
    volume_id: &str,
    ingest_date: Option<&str>,
    attrib: Attributes,
    config: Arc<Config>,
    formatter: Arc<dyn Formatter>,
  ) -> Self {
    Self {
      collection_id: collection_id.into(),
      volume_id: volume_id.into(),
      ingest_date: ingest_date.filter(|d| !d.is_empty()).map(Into::into),
      attrib,
      config,
      formatter,
    }
  }

  pub fn collection_id(&self) -> &str {
    &self.collection_id
  }

  pub fn volume_id(&self) -> &str {
    &self.volume_id
  }

  pub fn full_id(&self) -> String {
    build_anthology_id(&self.collection_id, &self.volume_id, None)
  }

  pub fn ingest_date(&self) -> Option<&str> {
    self.ingest_date.as_deref()
  }

  pub fn attrib(&self) -> &Attributes {
    &self.attrib
  }

  pub fn get(&self, field: &Field) -> Option<&Value> {
    self.attrib.get(field)
  }

  /// The volume title, taken from its booktitle
  pub fn title(&self, form: Form) -> String {
    self.formatter.render(self.attrib.markup(&Field::XmlBooktitle), form, false)
  }

  pub fn is_journal(&self) -> bool {
    is_journal(&self.full_id())
  }

  pub fn config(&self) -> &Arc<Config> {
    &self.config
  }

  pub fn formatter(&self) -> &Arc<dyn Formatter> {
    &self.formatter
  }
}

impl core::fmt::Debug for Volume {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Volume")
      .field("collection_id", &self.collection_id)
      .field("volume_id", &self.volume_id)
      .field("ingest_date", &self.ingest_date)
      .field("attrib", &self.attrib)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::formatter::{MarkupFormatter, TextNode};
  use pretty_assertions::assert_eq;

  fn volume(collection_id: &str, volume_id: &str) -> Volume {
    let mut attrib = Attributes::new();
    attrib.insert(
      Field::XmlBooktitle,
      TextNode::parse("<booktitle>Proceedings of <fixed-case>X</fixed-case></booktitle>").unwrap(),
    );
    attrib.insert(Field::Year, "2020");
    Volume::new(
      collection_id,
      volume_id,
      Some(""),
      attrib,
      Arc::new(Config::default()),
      Arc::new(MarkupFormatter),
    )
  }

  #[test]
  fn identity() {
    let vol = volume("2020.acl", "main");
    assert_eq!(vol.full_id(), "2020.acl-main");
    assert!(!vol.is_journal());
    assert!(volume("2020.tacl", "1").is_journal());
    assert_eq!(vol.ingest_date(), None);
  }

  #[test]
  fn title_renders_booktitle() {
    let vol = volume("P18", "1");
    assert_eq!(vol.title(Form::Plain), "Proceedings of X");
    assert_eq!(vol.title(Form::Latex), "Proceedings of {X}");
    assert_eq!(vol.attrib().text(&Field::Year), Some("2020"));
  }
}
