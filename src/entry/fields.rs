//! Field names and values of a resolved attribute set

use core::fmt;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::entry::name::Person;
use crate::formatter::TextNode;

/// Known attribute names. Anything else found in the data is carried
/// through as `Other`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
  Id,
  CollectionId,
  Bibkey,
  XmlTitle,
  Author,
  Editor,
  AuthorString,
  XmlBooktitle,
  Booktitle,
  XmlAbstract,
  Pages,
  PageFirst,
  PageLast,
  Month,
  Year,
  Address,
  Publisher,
  Note,
  Volume,
  Issue,
  XmlUrl,
  Url,
  Pdf,
  Doi,
  Language,
  Isbn,
  Revision,
  Erratum,
  Attachment,
  Retracted,
  MetaData,
  MetaJournalTitle,
  MetaVolume,
  MetaIssue,
  MetaDate,
  Sigs,
  Venues,
  Other(String),
}

impl Field {
  pub fn name(&self) -> &str {
    match self {
      Self::Id => "id",
      Self::CollectionId => "collection_id",
      Self::Bibkey => "bibkey",
      Self::XmlTitle => "xml_title",
      Self::Author => "author",
      Self::Editor => "editor",
      Self::AuthorString => "author_string",
      Self::XmlBooktitle => "xml_booktitle",
      Self::Booktitle => "booktitle",
      Self::XmlAbstract => "xml_abstract",
      Self::Pages => "pages",
      Self::PageFirst => "page_first",
      Self::PageLast => "page_last",
      Self::Month => "month",
      Self::Year => "year",
      Self::Address => "address",
      Self::Publisher => "publisher",
      Self::Note => "note",
      Self::Volume => "volume",
      Self::Issue => "issue",
      Self::XmlUrl => "xml_url",
      Self::Url => "url",
      Self::Pdf => "pdf",
      Self::Doi => "doi",
      Self::Language => "language",
      Self::Isbn => "isbn",
      Self::Revision => "revision",
      Self::Erratum => "erratum",
      Self::Attachment => "attachment",
      Self::Retracted => "retracted",
      Self::MetaData => "meta_data",
      Self::MetaJournalTitle => "meta_journal_title",
      Self::MetaVolume => "meta_volume",
      Self::MetaIssue => "meta_issue",
      Self::MetaDate => "meta_date",
      Self::Sigs => "sigs",
      Self::Venues => "venues",
      Self::Other(name) => name,
    }
  }

  /// Map an attribute name back to its field. Never fails: unknown names
  /// become `Other`.
  pub fn from_name(name: &str) -> Self {
    match name {
      "id" => Self::Id,
      "collection_id" => Self::CollectionId,
      "bibkey" => Self::Bibkey,
      "xml_title" => Self::XmlTitle,
      "author" => Self::Author,
      "editor" => Self::Editor,
      "author_string" => Self::AuthorString,
      "xml_booktitle" => Self::XmlBooktitle,
      "booktitle" => Self::Booktitle,
      "xml_abstract" => Self::XmlAbstract,
      "pages" => Self::Pages,
      "page_first" => Self::PageFirst,
      "page_last" => Self::PageLast,
      "month" => Self::Month,
      "year" => Self::Year,
      "address" => Self::Address,
      "publisher" => Self::Publisher,
      "note" => Self::Note,
      "volume" => Self::Volume,
      "issue" => Self::Issue,
      "xml_url" => Self::XmlUrl,
      "url" => Self::Url,
      "pdf" => Self::Pdf,
      "doi" => Self::Doi,
      "language" => Self::Language,
      "isbn" => Self::Isbn,
      "revision" => Self::Revision,
      "erratum" => Self::Erratum,
      "attachment" => Self::Attachment,
      "retracted" => Self::Retracted,
      "meta_data" => Self::MetaData,
      "meta_journal_title" => Self::MetaJournalTitle,
      "meta_volume" => Self::MetaVolume,
      "meta_issue" => Self::MetaIssue,
      "meta_date" => Self::MetaDate,
      "sigs" => Self::Sigs,
      "venues" => Self::Venues,
      other => Self::Other(other.into()),
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// A revision, erratum or attachment record
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
  pub url: String,
  #[serde(flatten)]
  pub attrs: BTreeMap<String, String>,
}

impl Link {
  pub fn new(url: impl Into<String>) -> Self {
    Self {
      url: url.into(),
      attrs: BTreeMap::new(),
    }
  }

  pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.attrs.insert(key.into(), value.into());
    self
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.attrs.get(key).map(String::as_str)
  }
}

/// Value of an attribute
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
  /// Present but empty in the data
  Null,
  Text(String),
  /// Text with inline markup (title, abstract, booktitle)
  Markup(TextNode),
  People(Vec<Person>),
  Links(Vec<Link>),
  /// Tag lists such as venues and SIGs
  List(Vec<String>),
}

impl Value {
  pub fn as_text(&self) -> Option<&str> {
    match self {
      Self::Text(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_markup(&self) -> Option<&TextNode> {
    match self {
      Self::Markup(node) => Some(node),
      _ => None,
    }
  }

  pub fn as_people(&self) -> Option<&[Person]> {
    match self {
      Self::People(people) => Some(people),
      _ => None,
    }
  }

  pub fn as_links(&self) -> Option<&[Link]> {
    match self {
      Self::Links(links) => Some(links),
      _ => None,
    }
  }
}

impl From<&str> for Value {
  fn from(s: &str) -> Self {
    Self::Text(s.into())
  }
}

impl From<String> for Value {
  fn from(s: String) -> Self {
    Self::Text(s)
  }
}

impl From<TextNode> for Value {
  fn from(node: TextNode) -> Self {
    Self::Markup(node)
  }
}

impl From<Vec<Person>> for Value {
  fn from(people: Vec<Person>) -> Self {
    Self::People(people)
  }
}

impl From<Vec<Link>> for Value {
  fn from(links: Vec<Link>) -> Self {
    Self::Links(links)
  }
}

/// Mapping from field to value, iterated in field order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes(BTreeMap<Field, Value>);

impl Attributes {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, field: &Field) -> Option<&Value> {
    self.0.get(field)
  }

  pub fn contains(&self, field: &Field) -> bool {
    self.0.contains_key(field)
  }

  pub fn insert(&mut self, field: Field, value: impl Into<Value>) -> Option<Value> {
    self.0.insert(field, value.into())
  }

  pub fn remove(&mut self, field: &Field) -> Option<Value> {
    self.0.remove(field)
  }

  /// Text value of a field. `None` when absent, null or not text.
  pub fn text(&self, field: &Field) -> Option<&str> {
    self.get(field).and_then(Value::as_text)
  }

  pub fn markup(&self, field: &Field) -> Option<&TextNode> {
    self.get(field).and_then(Value::as_markup)
  }

  pub fn people(&self, field: &Field) -> Option<&[Person]> {
    self.get(field).and_then(Value::as_people)
  }

  pub fn links(&self, field: &Field) -> Option<&[Link]> {
    self.get(field).and_then(Value::as_links)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&Field, &Value)> {
    self.0.iter()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl FromIterator<(Field, Value)> for Attributes {
  fn from_iter<I: IntoIterator<Item = (Field, Value)>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl<'a> IntoIterator for &'a Attributes {
  type Item = (&'a Field, &'a Value);
  type IntoIter = std::collections::btree_map::Iter<'a, Field, Value>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
