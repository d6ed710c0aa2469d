//! ISO 639-3 language codes and their English names

use isolang::Language;
use language_tags::LanguageTag;

use crate::error::LanguageLookupError;

/// Name of the language with the given ISO 639-3 code. The code must be a
/// bare three-letter primary language subtag; case is ignored.
pub fn language_name(code: &str) -> Result<&'static str, LanguageLookupError> {
  let unknown = || LanguageLookupError { code: code.to_string() };
  let tag = LanguageTag::parse(code.trim()).map_err(|_| unknown())?;
  let primary = tag.primary_language().to_ascii_lowercase();
  if primary.len() != 3 || tag.as_str().len() != primary.len() {
    return Err(unknown());
  }
  Language::from_639_3(&primary).map(|lang| lang.to_name()).ok_or_else(unknown)
}
