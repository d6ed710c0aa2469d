use bimap::BiMap;
use once_cell::sync::Lazy;
use phf::{phf_map, phf_set};

use crate::entry::fields::Field;

// Templates take the full paper or volume identifier (or a file name) in
// place of "{}"
pub const CANONICAL_URL_TEMPLATE: &str = "https://aclanthology.org/{}";
pub const PDF_LOCATION_TEMPLATE: &str = "https://aclanthology.org/{}.pdf";
pub const PDF_THUMBNAIL_LOCATION_TEMPLATE: &str = "https://aclanthology.org/thumb/{}.jpg";
pub const ATTACHMENT_TEMPLATE: &str = "https://aclanthology.org/attachments/{}";

/// Ingest date used when neither a paper nor its volume has one
pub const UNKNOWN_INGEST_DATE: &str = "1900-01-01";

/// Paper id of a volume's front matter
pub const FRONTMATTER_ID: &str = "0";

/// Venue ids of new-style identifiers which denote journals
pub static JOURNAL_VENUES: phf::Set<&'static str> = phf_set! {
  "cl",
  "tacl",
  "tal",
  "lilt",
  "ijclclp",
  "nejlt",
  "jlcl",
};

/// Letters starting old-style journal identifiers (J79-1001, Q13-1001)
pub const OLD_JOURNAL_PREFIXES: [char; 2] = ['J', 'Q'];

/// Volume metadata which never reaches an individual paper.
/// `editor` is handled separately as the front matter keeps it.
pub const VOLUME_ONLY_FIELDS: [Field; 13] = [
  Field::CollectionId,
  Field::Booktitle,
  Field::Id,
  Field::MetaData,
  Field::MetaJournalTitle,
  Field::MetaVolume,
  Field::MetaIssue,
  Field::Sigs,
  Field::Venues,
  Field::MetaDate,
  Field::Url,
  Field::Pdf,
  Field::XmlUrl,
];

/// Separators recognised in page ranges, in priority order
pub const PAGE_SEPARATORS: [&str; 3] = ["--", "-", "\u{2013}"];

/// Dash used in display page ranges
pub const EN_DASH: &str = "\u{2013}";

/// Month names and their BibTeX macros
pub static MONTHS: Lazy<BiMap<&'static str, &'static str>> = Lazy::new(|| {
  let mut months = BiMap::new();
  months.insert("january", "jan");
  months.insert("february", "feb");
  months.insert("march", "mar");
  months.insert("april", "apr");
  months.insert("may", "may");
  months.insert("june", "jun");
  months.insert("july", "jul");
  months.insert("august", "aug");
  months.insert("september", "sep");
  months.insert("october", "oct");
  months.insert("november", "nov");
  months.insert("december", "dec");
  months
});

/// Short month spellings found in the data which are not the macro name
pub static MONTH_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
  "sept" => "sep",
  "jan." => "jan",
  "feb." => "feb",
  "mar." => "mar",
  "apr." => "apr",
  "jun." => "jun",
  "jul." => "jul",
  "aug." => "aug",
  "sep." => "sep",
  "sept." => "sep",
  "oct." => "oct",
  "nov." => "nov",
  "dec." => "dec",
};
