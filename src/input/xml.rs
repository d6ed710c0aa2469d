//! Anthology collection XML
//!
//! A collection document holds volumes, each with a `<meta>` block, an
//! optional `<frontmatter>` and its papers:
//!
//! ```xml
//! <collection id="2020.acl">
//!   <volume id="main" ingest-date="2020-07-01">
//!     <meta>
//!       <booktitle>Proceedings of the 58th Annual Meeting</booktitle>
//!       <editor><first>Dan</first><last>Jurafsky</last></editor>
//!       <year>2020</year>
//!     </meta>
//!     <frontmatter>...</frontmatter>
//!     <paper id="1">...</paper>
//!   </volume>
//! </collection>
//! ```
//!
//! Volumes are resolved before their papers are built.

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use roxmltree::{Document, Node};

use crate::config::Config;
use crate::element_builder::from_roxmltree;
use crate::entry::fields::{Attributes, Field, Link, Value};
use crate::entry::name::{Person, PersonName};
use crate::entry::{Paper, ParsedPaper};
use crate::error::{Error, Result};
use crate::formatter::{Formatter, TextNode};
use crate::volume::Volume;

/// A volume together with the papers built from it
#[derive(Debug)]
pub struct VolumePapers {
  pub volume: Arc<Volume>,
  pub papers: Vec<Paper>,
}

#[derive(Debug)]
pub struct Collection {
  pub id: String,
  pub volumes: Vec<VolumePapers>,
}

impl Collection {
  pub fn papers(&self) -> impl Iterator<Item = &Paper> {
    self.volumes.iter().flat_map(|v| v.papers.iter())
  }
}

pub fn read_collection_file(path: &Path, config: Arc<Config>, formatter: Arc<dyn Formatter>) -> Result<Collection> {
  info!("Reading collection '{}'", path.display());
  let text = std::fs::read_to_string(path)?;
  read_collection(&text, config, formatter)
}

/// Parse a collection document into resolved volumes and papers
pub fn read_collection(text: &str, config: Arc<Config>, formatter: Arc<dyn Formatter>) -> Result<Collection> {
  let doc = Document::parse(text)?;
  let root = doc.root_element();
  if !root.has_tag_name("collection") {
    return Err(Error::MissingElement {
      parent: "document".into(),
      element: "collection".into(),
    });
  }
  let id = required_attribute(root, "id")?;
  let mut volumes = Vec::new();
  for node in root.children().filter(|n| n.has_tag_name("volume")) {
    volumes.push(read_volume(node, id, &config, &formatter)?);
  }
  info!("Found {} volumes in collection '{}'", volumes.len(), id);
  Ok(Collection { id: id.into(), volumes })
}

fn read_volume(
  node: Node,
  collection_id: &str,
  config: &Arc<Config>,
  formatter: &Arc<dyn Formatter>,
) -> Result<VolumePapers> {
  let volume_id = required_attribute(node, "id")?;
  let meta = node
    .children()
    .find(|n| n.has_tag_name("meta"))
    .ok_or_else(|| Error::MissingElement {
      parent: format!("volume id=\"{}\"", volume_id),
      element: "meta".into(),
    })?;

  let mut attrib: Attributes = parse_fields(meta)?.into_iter().collect();
  attrib.insert(Field::CollectionId, collection_id);
  attrib.insert(Field::Id, volume_id);
  let volume = Arc::new(Volume::new(
    collection_id,
    volume_id,
    node.attribute("ingest-date"),
    attrib,
    Arc::clone(config),
    Arc::clone(formatter),
  ));
  debug!("Resolved volume '{}'", volume.full_id());

  let mut papers = Vec::new();
  for child in node.children() {
    let id = if child.has_tag_name("frontmatter") {
      None
    } else if child.has_tag_name("paper") {
      child.attribute("id")
    } else {
      continue;
    };
    let parsed = ParsedPaper {
      id: id.map(Into::into),
      ingest_date: child.attribute("ingest-date").map(Into::into),
      fields: parse_fields(child)?,
    };
    papers.push(Paper::new(parsed, Arc::clone(&volume), Arc::clone(formatter)));
  }
  debug!("Found {} papers in volume '{}'", papers.len(), volume.full_id());
  Ok(VolumePapers { volume, papers })
}

fn required_attribute<'a>(node: Node<'a, '_>, attribute: &str) -> Result<&'a str> {
  node.attribute(attribute).ok_or_else(|| Error::MissingAttribute {
    element: node.tag_name().name().into(),
    attribute: attribute.into(),
  })
}

/// Fields of an element's children in document order. Repeated people,
/// links and tags are gathered into one list; other repeats overwrite.
fn parse_fields(element: Node) -> Result<Vec<(Field, Value)>> {
  let mut fields: Vec<(Field, Value)> = Vec::new();
  for child in element.children().filter(Node::is_element) {
    let (field, value) = parse_field(child)?;
    if let Some((_, existing)) = fields.iter_mut().find(|(f, _)| *f == field) {
      match (existing, value) {
        (Value::People(acc), Value::People(more)) => acc.extend(more),
        (Value::Links(acc), Value::Links(more)) => acc.extend(more),
        (Value::List(acc), Value::List(more)) => acc.extend(more),
        (existing, value) => *existing = value,
      }
      continue;
    }
    fields.push((field, value));
  }
  Ok(fields)
}

fn parse_field(node: Node) -> Result<(Field, Value)> {
  let tag = node.tag_name().name();
  let parsed = match tag {
    "title" => (Field::XmlTitle, markup(node)),
    "booktitle" => (Field::XmlBooktitle, markup(node)),
    "abstract" => (Field::XmlAbstract, markup(node)),
    "author" => (Field::Author, Value::People(vec![parse_person(node)?])),
    "editor" => (Field::Editor, Value::People(vec![parse_person(node)?])),
    "url" => (Field::XmlUrl, text_value(node)),
    "revision" => {
      let url = required_attribute(node, "href")?;
      let mut link = attributes_link(node, url, &["href"]);
      let explanation = text_of(node);
      if !explanation.is_empty() {
        link = link.with("explanation", explanation);
      }
      (Field::Revision, Value::Links(vec![link]))
    }
    "erratum" | "attachment" => {
      let url = text_of(node);
      if url.is_empty() {
        return Err(Error::MissingElement {
          parent: tag.into(),
          element: "#text".into(),
        });
      }
      let field = if tag == "erratum" { Field::Erratum } else { Field::Attachment };
      (field, Value::Links(vec![attributes_link(node, &url, &[])]))
    }
    "venue" => (Field::Venues, Value::List(vec![text_of(node)])),
    "sig" => (Field::Sigs, Value::List(vec![text_of(node)])),
    "journal-title" => (Field::MetaJournalTitle, text_value(node)),
    "journal-volume" => (Field::MetaVolume, text_value(node)),
    "journal-issue" => (Field::MetaIssue, text_value(node)),
    other => (Field::from_name(&other.replace('-', "_")), text_value(node)),
  };
  Ok(parsed)
}

fn markup(node: Node) -> Value {
  Value::Markup(TextNode::new(from_roxmltree(node)))
}

/// All text below a node, trimmed
fn text_of(node: Node) -> String {
  node
    .descendants()
    .filter(Node::is_text)
    .filter_map(|n| n.text())
    .collect::<String>()
    .trim()
    .to_string()
}

/// Text of a scalar field; an empty element is a null value
fn text_value(node: Node) -> Value {
  match text_of(node) {
    text if text.is_empty() => Value::Null,
    text => Value::Text(text),
  }
}

fn attributes_link(node: Node, url: &str, skip: &[&str]) -> Link {
  let mut link = Link::new(url);
  for attr in node.attributes() {
    if !skip.contains(&attr.name()) {
      link = link.with(attr.name(), attr.value());
    }
  }
  link
}

fn parse_person(node: Node) -> Result<Person> {
  let part = |name: &str| node.children().find(|c| c.has_tag_name(name)).map(text_of);
  let last = part("last").ok_or_else(|| Error::MissingElement {
    parent: node.tag_name().name().into(),
    element: "last".into(),
  })?;
  let name = PersonName::new(part("first").as_deref(), &last);
  Ok(Person::new(name, node.attribute("id").map(Into::into)))
}
