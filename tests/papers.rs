use std::sync::Arc;

use anthology::input::xml::{read_collection, Collection};
use anthology::*;
use pretty_assertions::assert_eq;

const PROCEEDINGS: &str = r#"<collection id="2020.acl">
  <volume id="main" ingest-date="2020-07-01">
    <meta>
      <booktitle>Proceedings of X</booktitle>
      <editor><first>Jane</first><last>Doe</last></editor>
      <publisher>ACL</publisher>
      <address>Online</address>
      <month>July</month>
      <year>2020</year>
      <isbn>9780306406157</isbn>
      <url>2020.acl-main</url>
      <venue>acl</venue>
    </meta>
    <frontmatter>
      <url>2020.acl-main.0</url>
      <bibkey>acl-2020-x</bibkey>
    </frontmatter>
    <paper id="1">
      <title>A <fixed-case>BERT</fixed-case> Study</title>
      <author><first>Lieke</first><last>Gelderloos</last></author>
      <pages>145--160</pages>
      <abstract>We study "stuff".</abstract>
      <doi>10.18653/v1/2020.acl-main.1</doi>
      <bibkey>gelderloos-2020-bert</bibkey>
      <language>eng</language>
    </paper>
  </volume>
</collection>"#;

const JOURNAL: &str = r#"<collection id="2020.tacl">
  <volume id="1">
    <meta>
      <booktitle>Transactions of the Association for Computational Linguistics, Volume 8</booktitle>
      <journal-title>Transactions of the Association for Computational Linguistics</journal-title>
      <journal-volume>8</journal-volume>
      <year>2020</year>
    </meta>
    <paper id="5">
      <title>Theory</title>
      <author><first>Ann</first><last>Bee</last></author>
      <pages>e12345</pages>
    </paper>
  </volume>
</collection>"#;

fn read(text: &str, config: Config) -> Collection {
  read_collection(text, Arc::new(config), Arc::new(MarkupFormatter)).unwrap()
}

fn papers(collection: &Collection) -> Vec<&Paper> {
  collection.papers().collect()
}

#[test]
fn frontmatter_end_to_end() {
  let collection = read(PROCEEDINGS, Config::default());
  let frontmatter = papers(&collection)[0];
  assert_eq!(frontmatter.title(), "Proceedings of X");
  assert_eq!(frontmatter.bibtype(), BibType::Proceedings);
  assert_eq!(
    frontmatter.attrib().people(&Field::Author),
    Some(&[Person::named("Jane", "Doe")][..])
  );
  assert!(!frontmatter.attrib().contains(&Field::Editor));
  assert_eq!(
    frontmatter.as_bibtex(false).unwrap(),
    r#"@proceedings{acl-2020-x,
    title = "Proceedings of X",
    editor = "Doe, Jane",
    month = jul,
    year = "2020",
    address = "Online",
    publisher = "ACL",
    url = "https://aclanthology.org/2020.acl-main.0",
    ISBN = "9780306406157",
}"#
  );
}

#[test]
fn inproceedings_record() {
  let collection = read(PROCEEDINGS, Config::default());
  let paper = papers(&collection)[1];
  let expected = r#"@inproceedings{gelderloos-2020-bert,
    title = "A {BERT} Study",
    author = "Gelderloos, Lieke",
    booktitle = "Proceedings of X",
    month = jul,
    year = "2020",
    address = "Online",
    publisher = "ACL",
    url = "https://aclanthology.org/2020.acl-main.1",
    doi = "10.18653/v1/2020.acl-main.1",
    pages = "145--160",
    abstract = "We study ``stuff''.",
    language = "English",
    ISBN = "9780306406157",
}"#;
  assert_eq!(paper.as_bibtex(false).unwrap(), expected);

  let concise = paper.as_bibtex(true).unwrap();
  assert!(!concise.contains("abstract"));
}

#[test]
fn bibtex_pages_read_back_as_display_pages() {
  let collection = read(PROCEEDINGS, Config::default());
  let paper = papers(&collection)[1];
  let record = paper.as_bibtex(false).unwrap();
  let pages = record
    .lines()
    .find_map(|line| line.trim().strip_prefix("pages = \""))
    .and_then(|rest| rest.strip_suffix("\","))
    .unwrap();
  assert_eq!(Some(pages.replace("--", "\u{2013}").as_str()), paper.attrib().text(&Field::Pages));
}

#[test]
fn dict_output() {
  let collection = read(PROCEEDINGS, Config::default());
  let paper = papers(&collection)[1];
  let dict = paper.as_dict().unwrap();
  assert_eq!(dict["title"], paper.get_title(Form::Plain));
  assert_eq!(dict["paper_id"], "1");
  assert_eq!(dict["parent_volume_id"], "2020.acl-main");
  assert_eq!(dict["bibkey"], "gelderloos-2020-bert");
  assert_eq!(dict["bibtype"], "inproceedings");
  assert_eq!(dict["language"], "English");
  assert_eq!(dict["booktitle"], "Proceedings of X");
  assert_eq!(dict["thumbnail"], "https://aclanthology.org/thumb/2020.acl-main.1.jpg");
  assert_eq!(dict["page_first"], "145");
  assert_eq!(dict["xml_title"], "A <fixed-case>BERT</fixed-case> Study");
  assert_eq!(dict["author"][0]["full"], "Lieke Gelderloos");
  assert_eq!(dict["author"][0]["id"], serde_json::Value::Null);
  assert!(!dict.contains_key("pdf"));
  assert!(!dict.contains_key("revision"));
  for key in ["collection_id", "meta_journal_title", "venues", "xml_url", "editor"] {
    assert!(!dict.contains_key(key), "{key} leaked into the dict");
  }

  let frontmatter = papers(&collection)[0];
  let dict = frontmatter.as_dict().unwrap();
  assert_eq!(dict["pdf"], "https://aclanthology.org/2020.acl-main.0.pdf");
  assert_eq!(dict["bibtype"], "proceedings");
  assert_eq!(dict["booktitle"], "");
}

#[test]
fn journal_article() {
  let collection = read(JOURNAL, Config::default());
  let paper = papers(&collection)[0];
  assert_eq!(paper.bibtype(), BibType::Article);
  assert!(!paper.attrib().contains(&Field::XmlBooktitle));
  assert!(!paper.attrib().contains(&Field::PageFirst));
  assert_eq!(
    paper.as_bibtex(false).unwrap(),
    r#"@article{,
    title = "Theory",
    author = "Bee, Ann",
    journal = "Transactions of the Association for Computational Linguistics",
    volume = "8",
    year = "2020",
    url = "https://aclanthology.org/2020.tacl-1.5",
    pages = "e12345",
}"#
  );
}

#[test]
fn isbn_normalisation() {
  let config = Config {
    isbn_normalise: true,
    ..Config::default()
  };
  let collection = read(PROCEEDINGS, config);
  let paper = papers(&collection)[1];
  assert!(paper.as_bibtex(false).unwrap().contains("ISBN = \"978-0-306-40615-7\","));
  assert!(paper.diagnostics().is_empty());

  let bad = read(
    &PROCEEDINGS.replace("9780306406157", "12345"),
    Config {
      isbn_normalise: true,
      ..Config::default()
    },
  );
  let paper = papers(&bad)[1];
  assert!(paper.as_bibtex(false).unwrap().contains("ISBN = \"12345\","));
  assert!(paper.as_bibtex(true).unwrap().contains("ISBN = \"12345\","));
  assert_eq!(paper.export_isbn(), Some("12345"));
  assert_eq!(paper.diagnostics().warnings().len(), 1);
}

#[test]
fn unknown_language_fails_export() {
  let collection = read(&PROCEEDINGS.replace("<language>eng", "<language>qqq"), Config::default());
  let paper = papers(&collection)[1];
  assert!(matches!(
    paper.as_bibtex(false),
    Err(Error::LanguageLookup(LanguageLookupError { ref code })) if code == "qqq"
  ));
  assert!(paper.as_dict().is_err());
}

#[test]
fn rare_language_codes_export() {
  let collection = read(&PROCEEDINGS.replace("<language>eng", "<language>nob"), Config::default());
  let paper = papers(&collection)[1];
  assert!(paper.as_bibtex(false).unwrap().contains("language = \"Norwegian Bokm"));
}

#[test]
fn configured_templates() {
  let config = Config::from_xml(
    "<config><pdf_location_template>https://mirror.example.org/{}.pdf</pdf_location_template></config>",
  )
  .unwrap();
  let collection = read(PROCEEDINGS, config);
  assert_eq!(
    papers(&collection)[0].pdf(),
    Some("https://mirror.example.org/2020.acl-main.0.pdf")
  );
}
