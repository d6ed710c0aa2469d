//! Flat JSON dict of a paper for templating

use serde_json::{json, Map, Value as Json};

use crate::entry::fields::{Field, Value};
use crate::entry::name::Person;
use crate::entry::Paper;
use crate::error::Result;
use crate::Form;

fn people_json(people: &[Person]) -> Json {
  people
    .iter()
    .map(|p| {
      json!({
        "first": p.name.first(),
        "last": p.name.last(),
        "full": p.name.full(),
        "id": p.id,
      })
    })
    .collect()
}

impl Paper {
  fn value_json(&self, value: &Value) -> Result<Json> {
    Ok(match value {
      Value::Null => Json::Null,
      Value::Text(text) => Json::from(text.as_str()),
      Value::Markup(node) => Json::from(self.formatter().render(Some(node), Form::Xml, false)),
      Value::People(people) => people_json(people),
      Value::Links(links) => serde_json::to_value(links)?,
      Value::List(items) => Json::from(items.clone()),
    })
  }

  /// Resolved attributes plus the derived fields, keyed by field name
  pub fn as_dict(&self) -> Result<Map<String, Json>> {
    let mut dict = Map::new();
    for (field, value) in self.items() {
      dict.insert(field.name().to_string(), self.value_json(value)?);
    }
    dict.insert("paper_id".into(), json!(self.paper_id()));
    dict.insert("parent_volume_id".into(), json!(self.parent_volume_id()));
    dict.insert("bibkey".into(), json!(self.bibkey()));
    dict.insert("bibtype".into(), json!(self.bibtype()));
    dict.insert("language".into(), json!(self.language()?));
    dict.insert("url".into(), json!(self.url()));
    dict.insert("title".into(), json!(self.title()));
    dict.insert("booktitle".into(), json!(self.booktitle()));
    if let Some(pdf) = self.pdf() {
      dict.insert("pdf".into(), json!(pdf));
    }
    for (field, links) in [
      (Field::Revision, self.revisions()),
      (Field::Erratum, self.errata()),
      (Field::Attachment, self.attachments()),
    ] {
      if !links.is_empty() {
        dict.insert(field.name().to_string(), serde_json::to_value(links)?);
      }
    }
    dict.insert("thumbnail".into(), json!(self.thumbnail()));
    Ok(dict)
  }
}
