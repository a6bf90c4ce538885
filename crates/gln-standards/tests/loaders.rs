use gln_model::CharClass;
use gln_standards::{StandardsError, load_default_feeds, load_descriptor, load_feed, load_feeds_from};

#[test]
fn default_descriptors_load() {
    let feeds = load_default_feeds().expect("load default feeds");
    let codes: Vec<&str> = feeds.iter().map(|feed| feed.code.as_str()).collect();
    assert_eq!(codes, vec!["company", "edibulb", "location", "plantion"]);
}

#[test]
fn company_contract_carries_the_exchange_fields() {
    let feed = load_feed("company").expect("load company feed");
    let rule = feed
        .rules
        .get("company_name")
        .expect("company_name rule present");
    assert_eq!(rule.class, CharClass::Alphanumeric);
    assert_eq!(rule.max_length, 70);

    let kvk = feed
        .rules
        .get("chamber_registration_number")
        .expect("chamber rule present");
    assert_eq!(kvk.class, CharClass::Numeric);
    assert_eq!(kvk.max_length, 8);

    // The location identifiers are not part of the company contract.
    assert!(feed.rules.get("FH_registration_nr").is_none());
    assert!(!feed.is_partitioned());
}

#[test]
fn location_contract_extends_the_company_one() {
    let feed = load_feed("location").expect("load location feed");
    assert!(feed.rules.get("FH_registration_nr").is_some());
    assert!(feed.rules.get("Plantion_registration_nr").is_some());
    assert_eq!(feed.partition_column.as_deref(), Some("expiry_date"));
}

#[test]
fn feed_shape_flags_come_from_the_descriptor() {
    let plantion = load_feed("plantion").expect("load plantion feed");
    assert!(plantion.packed);
    assert!(!plantion.merge_sources);

    let edibulb = load_feed("edibulb").expect("load edibulb feed");
    assert!(edibulb.merge_sources);
    assert!(!edibulb.packed);
}

#[test]
fn unknown_feed_is_an_error() {
    let error = load_feed("tulip").unwrap_err();
    assert!(matches!(error, StandardsError::UnknownFeed { .. }));
}

#[test]
fn duplicate_field_entries_are_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(
        &path,
        r#"
[feed]
code = "broken"
source_pattern = "broken"

[[field]]
column = "GLN"
class = "N"
max_length = 13

[[field]]
column = "gln"
class = "N"
max_length = 13
"#,
    )
    .unwrap();
    let error = load_descriptor(&path).unwrap_err();
    assert!(matches!(error, StandardsError::InvalidDescriptor { .. }));
}

#[test]
fn zero_max_length_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("zero.toml");
    std::fs::write(
        &path,
        r#"
[feed]
code = "zero"
source_pattern = "zero"

[[field]]
column = "GLN"
class = "N"
max_length = 0
"#,
    )
    .unwrap();
    let error = load_descriptor(&path).unwrap_err();
    assert!(matches!(error, StandardsError::InvalidDescriptor { .. }));
}

#[test]
fn non_toml_files_are_ignored() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a descriptor").unwrap();
    std::fs::write(
        dir.path().join("single.toml"),
        r#"
[feed]
code = "single"
source_pattern = "single"

[[field]]
column = "GLN"
class = "N"
max_length = 13
"#,
    )
    .unwrap();
    let feeds = load_feeds_from(dir.path()).expect("load from dir");
    assert_eq!(feeds.len(), 1);
    assert_eq!(feeds[0].code, "single");
    assert_eq!(feeds[0].export_delimiter, ';');
}
