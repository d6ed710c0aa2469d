//! BibTeX records
//!
//! [`Paper::as_bibtex`] selects and escapes the fields of a paper,
//! [`make_entry`] serialises them:
//!
//! ```text
//! @inproceedings{doe-2020-x,
//!     title = "A {BERT} Study",
//!     author = "Doe, Jane",
//!     month = jul,
//!     ...
//! }
//! ```

use lazy_regex::regex;
use log::trace;

use crate::constants::{EN_DASH, MONTHS, MONTH_ALIASES};
use crate::entry::fields::Field;
use crate::entry::names::{bibtex_names, Role};
use crate::entry::{BibType, Paper};
use crate::error::Result;
use crate::latex::recode::bibtex_encode;
use crate::Form;

/// BibTeX macro of a month name, abbreviation or common variant
fn month_macro(name: &str) -> Option<&'static str> {
  MONTHS
    .iter()
    .find(|(full, abbr)| unicase::eq(**full, name) || unicase::eq(**abbr, name))
    .map(|(_, abbr)| *abbr)
    .or_else(|| MONTH_ALIASES.get(name.to_lowercase().as_str()).copied())
}

/// Delimit a field value. Values containing `"` are braced.
fn quote(value: &str) -> String {
  if value.contains('"') {
    format!("{{{}}}", value)
  } else {
    format!("\"{}\"", value)
  }
}

/// Turn a month field into BibTeX: a lone month becomes its macro, month
/// names inside other text become macros concatenated with `#`, anything
/// else is quoted.
///
/// ```
/// use anthology::output::bibtex::convert_month;
///
/// assert_eq!(convert_month("July"), "jul");
/// assert_eq!(convert_month("June-July"), "jun # \"-\" # jul");
/// assert_eq!(convert_month("Spring"), "\"Spring\"");
/// ```
pub fn convert_month(month: &str) -> String {
  let month = month.trim();
  if let Some(macro_) = month_macro(month) {
    return macro_.to_string();
  }
  let mut parts = Vec::new();
  let mut last = 0;
  // longest alternatives first
  let words = regex!(
    r"(?i)\b(?:september|february|november|december|january|october|august|april|march|sept|july|june|may|jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec)\b"
  );
  for m in words.find_iter(month) {
    if m.start() > last {
      parts.push(quote(&month[last..m.start()]));
    }
    parts.push(month_macro(m.as_str()).map_or_else(|| quote(m.as_str()), str::to_string));
    last = m.end();
  }
  if parts.is_empty() {
    return quote(month);
  }
  if last < month.len() {
    parts.push(quote(&month[last..]));
  }
  parts.join(" # ")
}

/// Serialise a BibTeX record. Field values must already be escaped; the
/// authors of a `proceedings` record are written as its editors.
pub fn make_entry(bibkey: Option<&str>, bibtype: BibType, fields: &[(&str, String)]) -> String {
  let mut lines = vec![format!("@{}{{{},", bibtype, bibkey.unwrap_or(""))];
  for (name, value) in fields {
    let name = match *name {
      "author" if bibtype == BibType::Proceedings => "editor",
      name => name,
    };
    let value = match name {
      "month" => convert_month(value),
      _ => quote(value),
    };
    lines.push(format!("    {} = {},", name, value));
  }
  lines.push("}".to_string());
  lines.join("\n")
}

impl Paper {
  /// The paper as a BibTeX record. `concise` leaves out the abstract.
  pub fn as_bibtex(&self, concise: bool) -> Result<String> {
    let bibtype = self.bibtype();
    let volume = self.parent_volume();
    let mut fields = vec![("title", self.get_title(Form::Latex))];

    for role in Role::ALL {
      if let Some(people) = self.attrib().people(&role.field()) {
        fields.push((role.name(), bibtex_names(people)));
      }
    }

    if bibtype == BibType::Article {
      if let Some(journal) = volume.attrib().text(&Field::MetaJournalTitle) {
        fields.push(("journal", bibtex_encode(Some(journal))));
      }
      let journal_volume = volume
        .attrib()
        .text(&Field::MetaVolume)
        .or_else(|| volume.attrib().text(&Field::Volume));
      if let Some(journal_volume) = journal_volume {
        fields.push(("volume", journal_volume.to_string()));
      }
      let issue = volume
        .attrib()
        .text(&Field::MetaIssue)
        .or_else(|| volume.attrib().text(&Field::Issue));
      if let Some(issue) = issue {
        fields.push(("number", issue.to_string()));
      }
    } else if self.attrib().contains(&Field::XmlBooktitle) {
      fields.push(("booktitle", self.get_booktitle(Form::Latex)));
    } else if bibtype != BibType::Proceedings {
      fields.push(("booktitle", volume.title(Form::Latex)));
    }

    for (field, name) in [
      (Field::Month, "month"),
      (Field::Year, "year"),
      (Field::Address, "address"),
      (Field::Publisher, "publisher"),
      (Field::Note, "note"),
    ] {
      if let Some(value) = self.attrib().text(&field) {
        fields.push((name, bibtex_encode(Some(value))));
      }
    }

    fields.push(("url", self.url().to_string()));
    // escaping would break DOIs such as 10.1162/coli_a_00008
    if let Some(doi) = self.attrib().text(&Field::Doi) {
      fields.push(("doi", doi.to_string()));
    }
    if let Some(pages) = self.attrib().text(&Field::Pages) {
      fields.push(("pages", pages.replace(EN_DASH, "--")));
    }
    if self.has_abstract() && !concise {
      fields.push(("abstract", self.get_abstract(Form::Latex)));
    }
    if let Some(language) = self.language()? {
      fields.push(("language", language.to_string()));
    }
    if let Some(isbn) = self.export_isbn() {
      fields.push(("ISBN", isbn.to_string()));
    }

    trace!("BibTeX fields of '{}': {:?}", self.full_id(), fields);
    Ok(make_entry(self.bibkey(), bibtype, &fields))
  }
}
