//! `Paper` objects
//!
//! A paper starts from the resolved attributes of its volume, minus the
//! volume-only metadata, overlays its own parsed fields and is normalised
//! once. Everything derived from the result is computed on first use and
//! cached for the lifetime of the paper.

pub mod fields;
pub mod name;
pub mod names;

use core::fmt;
use std::str::FromStr;
use std::sync::Arc;

use isbn2::Isbn;
use log::debug;
use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::constants::{EN_DASH, FRONTMATTER_ID, PAGE_SEPARATORS, UNKNOWN_INGEST_DATE, VOLUME_ONLY_FIELDS};
use crate::diagnostics::Diagnostics;
use crate::entry::fields::{Attributes, Field, Link, Value};
use crate::entry::name::PersonName;
use crate::entry::names::{author_string, iter_people, Role};
use crate::error::LanguageLookupError;
use crate::formatter::Formatter;
use crate::langtags::language_name;
use crate::utils::{build_anthology_id, infer_attachment_url, infer_url, is_journal};
use crate::volume::Volume;
use crate::Form;

/// BibTeX entry type of a paper
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BibType {
  Article,
  Proceedings,
  InProceedings,
}

impl BibType {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Article => "article",
      Self::Proceedings => "proceedings",
      Self::InProceedings => "inproceedings",
    }
  }
}

impl fmt::Display for BibType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The fields of a paper as read from the data, before inheritance
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedPaper {
  /// Paper id within the volume; front matter when absent
  pub id: Option<String>,
  pub ingest_date: Option<String>,
  /// Fields in document order
  pub fields: Vec<(Field, Value)>,
}

impl ParsedPaper {
  pub fn new(id: &str) -> Self {
    Self {
      id: Some(id.into()),
      ..Self::default()
    }
  }

  pub fn frontmatter() -> Self {
    Self::new(FRONTMATTER_ID)
  }

  pub fn with(mut self, field: Field, value: impl Into<Value>) -> Self {
    self.fields.push((field, value.into()));
    self
  }

  pub fn with_ingest_date(mut self, date: &str) -> Self {
    self.ingest_date = Some(date.into());
    self
  }
}

pub struct Paper {
  paper_id: String,
  ingest_date: Option<String>,
  volume: Arc<Volume>,
  formatter: Arc<dyn Formatter>,
  bibkey: Option<String>,
  attrib: Attributes,
  diagnostics: Diagnostics,

  anthology_id: OnceCell<String>,
  url: OnceCell<String>,
  pdf: OnceCell<Option<String>>,
  revisions: OnceCell<Vec<Link>>,
  errata: OnceCell<Vec<Link>>,
  attachments: OnceCell<Vec<Link>>,
  thumbnail: OnceCell<String>,
  title: OnceCell<String>,
  booktitle: OnceCell<String>,
  language: OnceCell<Result<Option<&'static str>, LanguageLookupError>>,
  export_isbn: OnceCell<Option<String>>,
}

impl Paper {
  /// Build a paper of `volume` from its parsed fields. The volume must be
  /// fully resolved.
  pub fn new(parsed: ParsedPaper, volume: Arc<Volume>, formatter: Arc<dyn Formatter>) -> Self {
    let paper_id = parsed.id.unwrap_or_else(|| FRONTMATTER_ID.to_string());
    let mut paper = Self {
      attrib: inherit(volume.attrib(), paper_id == FRONTMATTER_ID),
      paper_id,
      ingest_date: parsed.ingest_date.filter(|d| !d.is_empty()),
      volume,
      formatter,
      bibkey: None,
      diagnostics: Diagnostics::new(),
      anthology_id: OnceCell::new(),
      url: OnceCell::new(),
      pdf: OnceCell::new(),
      revisions: OnceCell::new(),
      errata: OnceCell::new(),
      attachments: OnceCell::new(),
      thumbnail: OnceCell::new(),
      title: OnceCell::new(),
      booktitle: OnceCell::new(),
      language: OnceCell::new(),
      export_isbn: OnceCell::new(),
    };
    paper.overlay(parsed.fields);
    paper.normalise();
    debug!("Built paper '{}'", paper.full_id());
    paper
  }

  fn overlay(&mut self, fields: Vec<(Field, Value)>) {
    for (field, value) in fields {
      match field {
        Field::Bibkey => self.bibkey = value.as_text().map(Into::into),
        field => {
          if field == Field::Author && self.attrib.contains(&Field::Editor) {
            self.attrib.remove(&Field::Editor);
          }
          self.attrib.insert(field, value);
        }
      }
    }
  }

  fn normalise(&mut self) {
    let full_id = self.full_id().to_string();

    if self.is_frontmatter() {
      match self.attrib.markup(&Field::XmlBooktitle).cloned() {
        Some(mut title) => {
          title.set_tag("title");
          self.attrib.insert(Field::XmlTitle, title);
        }
        None => self
          .diagnostics
          .warn(format!("Front matter {} has no booktitle to use as its title", full_id)),
      }
    }

    if self.is_frontmatter() || is_journal(&full_id) {
      self.attrib.remove(&Field::XmlBooktitle);
    }

    if let Some(editors) = self.attrib.remove(&Field::Editor) {
      if self.is_frontmatter() {
        if self.attrib.contains(&Field::Author) {
          self.diagnostics.warn(format!(
            "Paper {} has both <editor> and <author>; ignoring <author>",
            full_id
          ));
        }
        // volume editors are the authors of its front matter
        self.attrib.insert(Field::Author, editors);
      } else {
        self.diagnostics.warn(format!(
          "Paper {} has <editor> but is not a proceedings volume; ignoring <editor>",
          full_id
        ));
      }
    }

    match self.attrib.get(&Field::Pages).cloned() {
      Some(Value::Null) => {
        self.attrib.remove(&Field::Pages);
      }
      Some(Value::Text(pages)) => {
        if let Some((first, last, display)) = split_pages(&pages) {
          self.attrib.insert(Field::PageFirst, first);
          self.attrib.insert(Field::PageLast, last);
          self.attrib.insert(Field::Pages, display);
        }
      }
      _ => {}
    }

    if let Some(joined) = self.attrib.people(&Field::Author).map(author_string) {
      self.attrib.insert(Field::AuthorString, joined);
    }

    // a null value would be skipped over as if the paper were not retracted
    if matches!(self.attrib.get(&Field::Retracted), Some(Value::Null)) {
      self.attrib.insert(Field::Retracted, " ");
    }
  }

  pub fn paper_id(&self) -> &str {
    &self.paper_id
  }

  pub fn collection_id(&self) -> &str {
    self.volume.collection_id()
  }

  pub fn volume_id(&self) -> &str {
    self.volume.volume_id()
  }

  /// The front matter of a volume is a pseudo-paper with id "0"
  pub fn is_frontmatter(&self) -> bool {
    self.paper_id == FRONTMATTER_ID
  }

  pub fn anthology_id(&self) -> &str {
    self.anthology_id.get_or_init(|| {
      build_anthology_id(self.volume.collection_id(), self.volume.volume_id(), Some(&self.paper_id))
    })
  }

  pub fn full_id(&self) -> &str {
    self.anthology_id()
  }

  /// Own ingest date, else the volume's, else the "unknown" sentinel
  pub fn ingest_date(&self) -> &str {
    self
      .ingest_date
      .as_deref()
      .or_else(|| self.volume.ingest_date())
      .unwrap_or(UNKNOWN_INGEST_DATE)
  }

  pub fn bibkey(&self) -> Option<&str> {
    self.bibkey.as_deref()
  }

  pub fn set_bibkey(&mut self, bibkey: impl Into<String>) {
    self.bibkey = Some(bibkey.into());
  }

  pub fn bibtype(&self) -> BibType {
    if is_journal(self.full_id()) {
      BibType::Article
    } else if self.is_frontmatter() {
      BibType::Proceedings
    } else {
      BibType::InProceedings
    }
  }

  pub fn formatter(&self) -> &Arc<dyn Formatter> {
    &self.formatter
  }

  pub fn parent_volume(&self) -> &Arc<Volume> {
    &self.volume
  }

  pub fn parent_volume_id(&self) -> String {
    self.volume.full_id()
  }

  pub fn url(&self) -> &str {
    self.url.get_or_init(|| {
      let template = &self.volume.config().canonical_url_template;
      match self.attrib.text(&Field::XmlUrl) {
        Some(url) => infer_url(url, template),
        None => infer_url(self.full_id(), template),
      }
    })
  }

  /// PDF location; only papers with an explicit source reference have one
  pub fn pdf(&self) -> Option<&str> {
    self
      .pdf
      .get_or_init(|| {
        self
          .attrib
          .text(&Field::XmlUrl)
          .map(|url| infer_url(url, &self.volume.config().pdf_location_template))
      })
      .as_deref()
  }

  pub fn revisions(&self) -> &[Link] {
    self.revisions.get_or_init(|| self.expand_versions(Field::Revision))
  }

  pub fn errata(&self) -> &[Link] {
    self.errata.get_or_init(|| self.expand_versions(Field::Erratum))
  }

  fn expand_versions(&self, field: Field) -> Vec<Link> {
    let template = &self.volume.config().pdf_location_template;
    let full_id = self.full_id();
    self
      .attrib
      .links(&field)
      .unwrap_or_default()
      .iter()
      .map(|link| {
        if !link.url.starts_with(full_id) {
          self.diagnostics.error(format!(
            "{} must begin with paper ID '{}', but is '{}'",
            field, full_id, link.url
          ));
        }
        Link {
          url: template.replace("{}", &link.url),
          attrs: link.attrs.clone(),
        }
      })
      .collect()
  }

  pub fn attachments(&self) -> &[Link] {
    self.attachments.get_or_init(|| {
      let template = &self.volume.config().attachment_template;
      self
        .attrib
        .links(&Field::Attachment)
        .unwrap_or_default()
        .iter()
        .map(|link| Link {
          url: infer_attachment_url(&link.url, self.full_id(), template, &self.diagnostics),
          attrs: link.attrs.clone(),
        })
        .collect()
    })
  }

  pub fn thumbnail(&self) -> &str {
    self
      .thumbnail
      .get_or_init(|| self.volume.config().pdf_thumbnail_template.replace("{}", self.full_id()))
  }

  /// Plain-text title
  pub fn title(&self) -> &str {
    self.title.get_or_init(|| self.get_title(Form::Plain))
  }

  /// Plain-text booktitle
  pub fn booktitle(&self) -> &str {
    self.booktitle.get_or_init(|| self.get_booktitle(Form::Plain))
  }

  pub fn get_title(&self, form: Form) -> String {
    self.formatter.render(self.attrib.markup(&Field::XmlTitle), form, false)
  }

  pub fn get_abstract(&self, form: Form) -> String {
    self.formatter.render(self.attrib.markup(&Field::XmlAbstract), form, true)
  }

  /// The paper's own booktitle, else the volume title unless the paper is
  /// front matter or part of a journal
  pub fn get_booktitle(&self, form: Form) -> String {
    if let Some(booktitle) = self.attrib.markup(&Field::XmlBooktitle) {
      return self.formatter.render(Some(booktitle), form, false);
    }
    if self.is_frontmatter() || is_journal(self.full_id()) {
      return String::new();
    }
    self.volume.title(form)
  }

  pub fn has_abstract(&self) -> bool {
    self.attrib.contains(&Field::XmlAbstract)
  }

  pub fn is_retracted(&self) -> bool {
    self.attrib.contains(&Field::Retracted)
  }

  pub fn isbn(&self) -> Option<&str> {
    self.attrib.text(&Field::Isbn)
  }

  /// ISBN as exported: hyphenated when the configuration asks for it. An
  /// invalid ISBN is reported and kept as it is.
  pub fn export_isbn(&self) -> Option<&str> {
    self
      .export_isbn
      .get_or_init(|| {
        let isbn = self.isbn()?;
        if !self.volume.config().isbn_normalise {
          return Some(isbn.to_string());
        }
        Some(match Isbn::from_str(isbn).and_then(|parsed| parsed.hyphenate()) {
          Ok(hyphenated) => hyphenated.to_string(),
          Err(e) => {
            self
              .diagnostics
              .warn(format!("Invalid ISBN '{}' in {}: {:?}", isbn, self.full_id(), e));
            isbn.to_string()
          }
        })
      })
      .as_deref()
  }

  /// ISO 639-3 language code, if the paper has one
  pub fn langcode(&self) -> Option<&str> {
    self.attrib.text(&Field::Language)
  }

  /// Name of the paper's language. No code is not an error; an unknown
  /// code is.
  pub fn language(&self) -> Result<Option<&'static str>, LanguageLookupError> {
    self
      .language
      .get_or_init(|| self.langcode().map(language_name).transpose())
      .clone()
  }

  pub fn get(&self, field: &Field) -> Option<&Value> {
    self.attrib.get(field)
  }

  pub fn attrib(&self) -> &Attributes {
    &self.attrib
  }

  pub fn items(&self) -> impl Iterator<Item = (&Field, &Value)> {
    self.attrib.iter()
  }

  /// People of the paper with their ids, authors first
  pub fn iter_people(&self) -> impl Iterator<Item = (&PersonName, Option<&str>, Role)> + '_ {
    iter_people(&self.attrib)
  }

  /// Problems found while building or deriving fields of this paper
  pub fn diagnostics(&self) -> &Diagnostics {
    &self.diagnostics
  }
}

impl fmt::Debug for Paper {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Paper")
      .field("full_id", &self.full_id())
      .field("bibkey", &self.bibkey)
      .field("attrib", &self.attrib)
      .finish_non_exhaustive()
  }
}

/// Volume attributes a paper starts from. Editors only pass to the front
/// matter.
fn inherit(volume: &Attributes, frontmatter: bool) -> Attributes {
  volume
    .iter()
    .filter(|(field, _)| !VOLUME_ONLY_FIELDS.contains(*field))
    .filter(|(field, _)| frontmatter || **field != Field::Editor)
    .map(|(field, value)| (field.clone(), value.clone()))
    .collect()
}

/// Split a page range at the first separator occurring exactly once.
/// Returns first page, last page and the range rewritten with an en dash.
fn split_pages(pages: &str) -> Option<(String, String, String)> {
  PAGE_SEPARATORS.iter().find_map(|sep| {
    if pages.matches(sep).count() != 1 {
      return None;
    }
    let (first, last) = pages.split_once(sep)?;
    Some((first.to_string(), last.to_string(), pages.replacen(sep, EN_DASH, 1)))
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Config;
  use crate::entry::name::Person;
  use crate::formatter::{MarkupFormatter, TextNode};
  use pretty_assertions::assert_eq;

  fn booktitle(text: &str) -> TextNode {
    TextNode::from_text("booktitle", text)
  }

  fn volume(collection_id: &str, volume_id: &str, attrib: Attributes) -> Arc<Volume> {
    Arc::new(Volume::new(
      collection_id,
      volume_id,
      Some("2020-07-01"),
      attrib,
      Arc::new(Config::default()),
      Arc::new(MarkupFormatter),
    ))
  }

  fn paper(parsed: ParsedPaper, volume: &Arc<Volume>) -> Paper {
    Paper::new(parsed, Arc::clone(volume), Arc::new(MarkupFormatter))
  }

  fn proceedings() -> Arc<Volume> {
    let attrib = [
      (Field::XmlBooktitle, Value::from(booktitle("Proceedings of X"))),
      (Field::Editor, Value::from(vec![Person::named("Jane", "Doe")])),
      (Field::Year, Value::from("2020")),
      (Field::CollectionId, Value::from("2020.acl")),
      (Field::MetaData, Value::from("meta")),
      (Field::Url, Value::from("https://example.org/volume")),
      (Field::XmlUrl, Value::from("2020.acl-main")),
      (Field::Venues, Value::List(vec!["acl".into()])),
    ]
    .into_iter()
    .collect();
    volume("2020.acl", "main", attrib)
  }

  #[test]
  fn volume_only_fields_are_not_inherited() {
    let volume_only = [
      "collection_id",
      "booktitle",
      "id",
      "meta_data",
      "meta_journal_title",
      "meta_volume",
      "meta_issue",
      "sigs",
      "venues",
      "meta_date",
      "url",
      "pdf",
      "xml_url",
    ];
    let mut attrib: Attributes = volume_only
      .iter()
      .map(|name| (Field::from_name(name), Value::from("volume")))
      .collect();
    attrib.insert(Field::XmlBooktitle, booktitle("Proceedings of X"));
    attrib.insert(Field::Year, "2020");
    let vol = volume("2020.acl", "main", attrib);
    assert_eq!(vol.attrib().len(), volume_only.len() + 2);

    for parsed in [ParsedPaper::frontmatter(), ParsedPaper::new("1")] {
      let paper = paper(parsed, &vol);
      for name in volume_only {
        let field = Field::from_name(name);
        assert!(!paper.attrib().contains(&field), "{} leaked into {}", name, paper.full_id());
      }
      assert_eq!(paper.attrib().text(&Field::Year), Some("2020"));
    }
  }

  #[test]
  fn frontmatter_takes_volume_editors_and_title() {
    let paper = paper(ParsedPaper::frontmatter(), &proceedings());
    assert_eq!(paper.title(), "Proceedings of X");
    assert_eq!(paper.bibtype(), BibType::Proceedings);
    assert_eq!(paper.attrib().people(&Field::Author), Some(&[Person::named("Jane", "Doe")][..]));
    assert!(!paper.attrib().contains(&Field::Editor));
    assert!(!paper.attrib().contains(&Field::XmlBooktitle));
    assert_eq!(paper.attrib().text(&Field::AuthorString), Some("Jane Doe"));
    assert_eq!(paper.booktitle(), "");
    assert!(paper.diagnostics().is_empty());
  }

  #[test]
  fn frontmatter_editor_wins_over_author() {
    let attrib = [
      (Field::XmlBooktitle, Value::from(booktitle("Proceedings of X"))),
      (Field::Editor, Value::from(vec![Person::named("Ed", "Itor")])),
      (Field::Author, Value::from(vec![Person::named("Au", "Thor")])),
    ]
    .into_iter()
    .collect();
    let paper = paper(ParsedPaper::frontmatter(), &volume("P18", "1", attrib));
    assert_eq!(paper.attrib().people(&Field::Author), Some(&[Person::named("Ed", "Itor")][..]));
    assert!(!paper.attrib().contains(&Field::Editor));
    assert_eq!(paper.diagnostics().warnings().len(), 1);
  }

  #[test]
  fn own_authors_replace_inherited_editors() {
    let parsed = ParsedPaper::frontmatter().with(Field::Author, vec![Person::named("Au", "Thor")]);
    let paper = paper(parsed, &proceedings());
    assert_eq!(paper.attrib().text(&Field::AuthorString), Some("Au Thor"));
    assert!(paper.diagnostics().is_empty());
  }

  #[test]
  fn editors_are_dropped_from_ordinary_papers() {
    let parsed = ParsedPaper::new("3").with(Field::Editor, vec![Person::named("Ed", "Itor")]);
    let paper = paper(parsed, &proceedings());
    assert!(!paper.attrib().contains(&Field::Editor));
    assert!(!paper.attrib().contains(&Field::Author));
    assert_eq!(paper.diagnostics().warnings().len(), 1);
  }

  #[test]
  fn bibtype_classification() {
    let journal = volume("2020.tacl", "1", Attributes::new());
    assert_eq!(paper(ParsedPaper::new("4"), &journal).bibtype(), BibType::Article);
    assert_eq!(paper(ParsedPaper::frontmatter(), &journal).bibtype(), BibType::Article);
    assert_eq!(paper(ParsedPaper::new("4"), &proceedings()).bibtype(), BibType::InProceedings);
    assert_eq!(BibType::InProceedings.to_string(), "inproceedings");
  }

  #[test]
  fn journal_papers_lose_the_booktitle() {
    let attrib = [(Field::XmlBooktitle, Value::from(booktitle("TACL 8")))].into_iter().collect();
    let paper = paper(ParsedPaper::new("4"), &volume("2020.tacl", "1", attrib));
    assert!(!paper.attrib().contains(&Field::XmlBooktitle));
    assert_eq!(paper.booktitle(), "");
  }

  #[test]
  fn pages_are_split_once() {
    assert_eq!(
      split_pages("145--160"),
      Some(("145".into(), "160".into(), "145\u{2013}160".into()))
    );
    assert_eq!(split_pages("1-9"), Some(("1".into(), "9".into(), "1\u{2013}9".into())));
    assert_eq!(split_pages("e12345"), None);
    assert_eq!(split_pages("3-5-7"), None);
    assert_eq!(
      split_pages("12\u{2013}13"),
      Some(("12".into(), "13".into(), "12\u{2013}13".into()))
    );
  }

  #[test]
  fn page_fields() {
    let vol = proceedings();
    let split = paper(ParsedPaper::new("1").with(Field::Pages, "145--160"), &vol);
    assert_eq!(split.attrib().text(&Field::Pages), Some("145\u{2013}160"));
    assert_eq!(split.attrib().text(&Field::PageFirst), Some("145"));
    assert_eq!(split.attrib().text(&Field::PageLast), Some("160"));

    let unsplit = paper(ParsedPaper::new("1").with(Field::Pages, "3-5-7"), &vol);
    assert_eq!(unsplit.attrib().text(&Field::Pages), Some("3-5-7"));
    assert!(!unsplit.attrib().contains(&Field::PageFirst));

    let null = paper(ParsedPaper::new("1").with(Field::Pages, Value::Null), &vol);
    assert!(!null.attrib().contains(&Field::Pages));
  }

  #[test]
  fn retracted_null_becomes_a_space() {
    let paper = paper(ParsedPaper::new("1").with(Field::Retracted, Value::Null), &proceedings());
    assert!(paper.is_retracted());
    assert_eq!(paper.attrib().text(&Field::Retracted), Some(" "));
  }

  #[test]
  fn urls() {
    let vol = proceedings();
    let plain = paper(ParsedPaper::new("7"), &vol);
    assert_eq!(plain.url(), "https://aclanthology.org/2020.acl-main.7");
    assert_eq!(plain.pdf(), None);
    assert_eq!(plain.thumbnail(), "https://aclanthology.org/thumb/2020.acl-main.7.jpg");

    let with_url = paper(ParsedPaper::new("7").with(Field::XmlUrl, "2020.acl-main.7"), &vol);
    assert_eq!(with_url.url(), "https://aclanthology.org/2020.acl-main.7");
    assert_eq!(with_url.pdf(), Some("https://aclanthology.org/2020.acl-main.7.pdf"));
  }

  #[test]
  fn revisions_are_checked_and_expanded() {
    let revisions = vec![
      Link::new("2020.acl-main.7v2").with("id", "2"),
      Link::new("2020.acl-main.8v2").with("id", "3"),
    ];
    let paper = paper(ParsedPaper::new("7").with(Field::Revision, revisions), &proceedings());
    let expanded: Vec<&str> = paper.revisions().iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
      expanded,
      [
        "https://aclanthology.org/2020.acl-main.7v2.pdf",
        "https://aclanthology.org/2020.acl-main.8v2.pdf"
      ]
    );
    assert_eq!(paper.revisions()[0].get("id"), Some("2"));
    // cached, so the bad link is reported once
    paper.revisions();
    assert_eq!(paper.diagnostics().errors().len(), 1);
    assert!(paper.errata().is_empty());
  }

  #[test]
  fn attachments_are_expanded() {
    let attachments = vec![Link::new("2020.acl-main.7.Software.zip").with("type", "software")];
    let paper = paper(ParsedPaper::new("7").with(Field::Attachment, attachments), &proceedings());
    assert_eq!(
      paper.attachments()[0].url,
      "https://aclanthology.org/attachments/2020.acl-main.7.Software.zip"
    );
    assert!(paper.diagnostics().is_empty());
  }

  #[test]
  fn language_lookup() {
    let vol = proceedings();
    assert_eq!(paper(ParsedPaper::new("1"), &vol).language(), Ok(None));
    let german = paper(ParsedPaper::new("1").with(Field::Language, "deu"), &vol);
    assert_eq!(german.language(), Ok(Some("German")));
    assert_eq!(german.langcode(), Some("deu"));
    let unknown = paper(ParsedPaper::new("1").with(Field::Language, "qqq"), &vol);
    assert_eq!(unknown.language(), Err(LanguageLookupError { code: "qqq".into() }));
  }

  #[test]
  fn bibkey_and_ingest_date() {
    let vol = proceedings();
    let mut keyed = paper(ParsedPaper::new("1").with(Field::Bibkey, "doe-2020-x"), &vol);
    assert_eq!(keyed.bibkey(), Some("doe-2020-x"));
    assert!(!keyed.attrib().contains(&Field::Bibkey));
    keyed.set_bibkey("doe-2020-y");
    assert_eq!(keyed.bibkey(), Some("doe-2020-y"));
    assert_eq!(keyed.ingest_date(), "2020-07-01");

    let own = paper(ParsedPaper::new("2").with_ingest_date("2021-01-01"), &vol);
    assert_eq!(own.ingest_date(), "2021-01-01");

    let undated = Arc::new(Volume::new(
      "P18",
      "1",
      None,
      Attributes::new(),
      Arc::new(Config::default()),
      Arc::new(MarkupFormatter),
    ));
    assert_eq!(paper(ParsedPaper::new("1"), &undated).ingest_date(), UNKNOWN_INGEST_DATE);
  }

  #[test]
  fn people_in_role_order() {
    let parsed = ParsedPaper::new("1").with(
      Field::Author,
      vec![
        Person::new(PersonName::new(Some("A"), "One"), Some("a-one".into())),
        Person::named("B", "Two"),
      ],
    );
    let paper = paper(parsed, &proceedings());
    let people: Vec<(String, Option<&str>, Role)> =
      paper.iter_people().map(|(name, id, role)| (name.full(), id, role)).collect();
    assert_eq!(
      people,
      [
        ("A One".to_string(), Some("a-one"), Role::Author),
        ("B Two".to_string(), None, Role::Author)
      ]
    );
    assert_eq!(paper.iter_people().count(), 2);
  }

  #[test]
  fn derived_fields_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Paper>();
  }
}
