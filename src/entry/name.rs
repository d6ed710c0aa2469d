//! `entry::PersonName` objects

use serde::Serialize;

use crate::latex::recode::bibtex_encode;
use crate::utils::NFC;

/// A personal name as given in the data: an optional first part and a
/// mandatory last part.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PersonName {
  first: Option<String>,
  last: String,
}

impl PersonName {
  pub fn new(first: Option<&str>, last: &str) -> Self {
    Self {
      first: first.map(str::trim).filter(|f| !f.is_empty()).map(NFC),
      last: NFC(last.trim()),
    }
  }

  /// Parse "First Last" or "Last, First"
  pub fn from_string(name: &str) -> Self {
    match name.split_once(',') {
      Some((last, first)) => Self::new(Some(first), last),
      None => match name.trim().rsplit_once(' ') {
        Some((first, last)) => Self::new(Some(first), last),
        None => Self::new(None, name),
      },
    }
  }

  pub fn first(&self) -> Option<&str> {
    self.first.as_deref()
  }

  pub fn last(&self) -> &str {
    &self.last
  }

  /// Full display form. Names written in Han or kana script put the
  /// family name first without a separating space.
  pub fn full(&self) -> String {
    match &self.first {
      None => self.last.clone(),
      Some(first) if is_cjk(first) && is_cjk(&self.last) => format!("{}{}", self.last, first),
      Some(first) => format!("{} {}", first, self.last),
    }
  }

  /// "Last, First", or just "Last"
  pub fn last_first(&self) -> String {
    match &self.first {
      None => self.last.clone(),
      Some(first) => format!("{}, {}", self.last, first),
    }
  }

  /// Name in BibTeX form, escaped
  pub fn as_bibtex(&self) -> String {
    bibtex_encode(Some(&self.last_first()))
  }
}

fn is_cjk(s: &str) -> bool {
  !s.is_empty()
    && s.chars().all(|c| {
      matches!(c,
        '\u{3040}'..='\u{30ff}'   // hiragana, katakana
        | '\u{3400}'..='\u{4dbf}' // CJK extension A
        | '\u{4e00}'..='\u{9fff}' // CJK unified
        | '\u{f900}'..='\u{faff}' // compatibility ideographs
      )
    })
}

/// A name with the optional external identifier the data attaches to it
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Person {
  pub name: PersonName,
  pub id: Option<String>,
}

impl Person {
  pub fn new(name: PersonName, id: Option<String>) -> Self {
    Self { name, id }
  }

  pub fn named(first: &str, last: &str) -> Self {
    Self::new(PersonName::new(Some(first), last), None)
  }
}
