//! Encode UTF-8 text as LaTeX for BibTeX output
//!
//! ```
//! use anthology::latex::recode::latex_encode;
//!
//! assert_eq!(latex_encode("Muḥammad ibn Mūsā"), "Mu{\\d{h}}ammad ibn M{\\=u}s{\\=a}");
//! ```
//!
//! Specials are escaped, letters with combining diacritics become accent
//! macros, a few symbols become their LaTeX spelling and everything else
//! passes through unchanged.

use lazy_regex::regex_replace_all;
use phf::phf_map;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Characters with a dedicated LaTeX spelling
static SPECIALS: phf::Map<char, &'static str> = phf_map! {
  '\\' => "{\\textbackslash}",
  '{' => "\\{",
  '}' => "\\}",
  '$' => "\\$",
  '&' => "\\&",
  '%' => "\\%",
  '#' => "\\#",
  '_' => "\\_",
  '~' => "{\\textasciitilde}",
  '^' => "{\\textasciicircum}",
  'ß' => "{\\ss}",
  'æ' => "{\\ae}",
  'Æ' => "{\\AE}",
  'œ' => "{\\oe}",
  'Œ' => "{\\OE}",
  'ø' => "{\\o}",
  'Ø' => "{\\O}",
  'ł' => "{\\l}",
  'Ł' => "{\\L}",
  'ı' => "{\\i}",
  '\u{a0}' => "~",
  '\u{2013}' => "--",
  '\u{2014}' => "---",
  '\u{2018}' => "`",
  '\u{2019}' => "'",
  '\u{201c}' => "``",
  '\u{201d}' => "''",
  '\u{2026}' => "{\\ldots}",
};

/// Combining marks and the accent macro producing them. `true` marks
/// accents whose macro name is a letter and so needs a braced argument.
static ACCENTS: phf::Map<char, (&'static str, bool)> = phf_map! {
  '\u{300}' => ("`", false),
  '\u{301}' => ("'", false),
  '\u{302}' => ("^", false),
  '\u{303}' => ("~", false),
  '\u{304}' => ("=", false),
  '\u{306}' => ("u", true),
  '\u{307}' => (".", false),
  '\u{308}' => ("\"", false),
  '\u{30a}' => ("r", true),
  '\u{30b}' => ("H", true),
  '\u{30c}' => ("v", true),
  '\u{323}' => ("d", true),
  '\u{327}' => ("c", true),
  '\u{328}' => ("k", true),
  '\u{331}' => ("b", true),
};

/// LaTeX-encode a string. The input must not already contain LaTeX.
pub fn latex_encode(s: &str) -> String {
  let decomposed: String = s.nfd().collect();
  let mut out = String::with_capacity(s.len());
  for grapheme in decomposed.graphemes(true) {
    let mut chars = grapheme.chars();
    let base = match chars.next() {
      Some(c) => c,
      None => continue,
    };
    let marks: Vec<char> = chars.collect();
    if marks.is_empty() {
      match SPECIALS.get(&base) {
        Some(macro_) => out.push_str(macro_),
        None => out.push(base),
      }
      continue;
    }
    match encode_accented(base, &marks) {
      Some(encoded) => out.push_str(&encoded),
      // no macro for this combination, keep it composed
      None => out.extend(grapheme.nfc()),
    }
  }
  out
}

fn encode_accented(base: char, marks: &[char]) -> Option<String> {
  if !base.is_ascii_alphabetic() {
    return None;
  }
  let mut acc = base.to_string();
  for (i, mark) in marks.iter().enumerate() {
    let (name, letter) = ACCENTS.get(mark)?;
    acc = if i == 0 && !letter {
      format!("\\{name}{acc}")
    } else {
      format!("\\{name}{{{acc}}}")
    };
  }
  Some(format!("{{{acc}}}"))
}

/// Convert straight double quotes into TeX quotes: `` before a word, ''
/// everywhere else. Escaped quotes (`\"`) are accent macros and left alone.
pub fn convert_quotes(s: &str) -> String {
  regex_replace_all!(r#"(\\?)"(\w?)"#, s, |_, escape: &str, next: &str| {
    if !escape.is_empty() {
      format!("\\\"{}", next)
    } else if next.is_empty() {
      "''".to_string()
    } else {
      format!("``{}", next)
    }
  })
  .into_owned()
}

/// Encode a plain text value for a BibTeX field. An absent value encodes
/// as the empty string.
pub fn bibtex_encode(text: Option<&str>) -> String {
  match text {
    None => String::new(),
    Some(text) => convert_quotes(&latex_encode(text)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn escapes_specials() {
    assert_eq!(latex_encode("50% of $5 & #1_a"), "50\\% of \\$5 \\& \\#1\\_a");
    assert_eq!(latex_encode("{a}~b"), "\\{a\\}{\\textasciitilde}b");
  }

  #[test]
  fn accents_become_macros() {
    assert_eq!(latex_encode("café"), "caf{\\'e}");
    assert_eq!(latex_encode("Çelik"), "{\\c{C}}elik");
    assert_eq!(latex_encode("Dvořák"), "Dvo{\\v{r}}{\\'a}k");
  }

  #[test]
  fn unknown_scripts_pass_through() {
    assert_eq!(latex_encode("日本語"), "日本語");
    assert_eq!(latex_encode("Straße – 1…"), "Stra{\\ss}e -- 1{\\ldots}");
  }

  #[test]
  fn quotes() {
    assert_eq!(convert_quotes("the \"best\" one"), "the ``best'' one");
    assert_eq!(convert_quotes("{\\\"o}"), "{\\\"o}");
    assert_eq!(convert_quotes(r#""a" "" "b""#), "``a'' '''' ``b''");
    assert_eq!(convert_quotes("\"\u{e9}t\u{e9}\"."), "``\u{e9}t\u{e9}''.");
  }

  #[test]
  fn absent_text_encodes_empty() {
    assert_eq!(bibtex_encode(None), "");
    assert_eq!(bibtex_encode(Some("\"Quoted\"")), "``Quoted''");
  }
}
