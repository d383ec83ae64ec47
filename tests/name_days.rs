use chrono::NaiveDate;
use nameday_core::core::converter::contains_cyrillic;
use nameday_core::{transliterate, NameDayError, NameDays};
use std::collections::HashSet;
use std::io::Write;
use tempfile::NamedTempFile;

fn days() -> &'static NameDays {
    NameDays::builtin()
}

#[test]
fn name_day_for_cyrillic_name() {
    let result = days().name_day("Георги").expect("Георги has a name day");
    assert_eq!(result.date, "05-06");
    assert_eq!(result.holiday, "Гергьовден");
    assert!(result.names.iter().any(|n| n == "Георги"));
}

#[test]
fn name_day_for_latin_name() {
    assert_eq!(days().name_day("Georgi").unwrap().date, "05-06");
    assert_eq!(days().name_day("Yordan").unwrap().date, "01-06");
    assert_eq!(days().name_day("Yuliya").unwrap().date, "07-15");
}

#[test]
fn name_day_is_case_insensitive() {
    assert_eq!(days().name_day("георги").unwrap().date, "05-06");
    assert_eq!(days().name_day("GEORGI").unwrap().date, "05-06");
}

#[test]
fn name_day_known_dates() {
    let vasil = days().name_day("Васил").unwrap();
    assert_eq!(vasil.date, "01-01");
    assert_eq!(vasil.holiday, "Васильовден (Нова година)");

    let nikola = days().name_day("Никола").unwrap();
    assert_eq!(nikola.date, "12-06");
    assert_eq!(nikola.holiday, "Никулден");
}

#[test]
fn name_day_misses() {
    assert!(days().name_day("Непознато").is_none());
    assert!(days().name_day("").is_none());
    assert!(days().name_day("Геор").is_none());
}

#[test]
fn names_by_date() {
    let result = days().names_by_date("05-06").unwrap();
    assert_eq!(result.holiday, "Гергьовден");
    assert!(result.names.iter().any(|n| n == "Георги"));

    assert!(days().names_by_date("01-01").unwrap().names.iter().any(|n| n == "Васил"));
    assert!(days().names_by_date("13-99").is_none());
    assert!(days().names_by_date("").is_none());
}

#[test]
fn names_on_a_calendar_date() {
    let may_sixth = NaiveDate::from_ymd_opt(2026, 5, 6).unwrap();
    assert_eq!(days().names_on(&may_sixth).unwrap().holiday, "Гергьовден");
}

#[test]
fn today_is_shaped_like_a_record() {
    if let Some(record) = days().today() {
        assert_eq!(record.date.len(), 5);
        assert!(!record.holiday.is_empty());
    }
}

#[test]
fn search_by_cyrillic_prefix() {
    let results = days().search("Геор");
    assert!(results.iter().any(|r| r.name == "Георги"));
    assert!(!days().search("геор").is_empty());
}

#[test]
fn search_by_latin_prefix() {
    let results = days().search("Geo");
    assert!(results.iter().any(|r| r.name == "Георги" && r.date == "05-06"));
}

#[test]
fn search_misses_and_blank_queries() {
    assert!(days().search("xyz123").is_empty());
    assert!(days().search("").is_empty());
    assert!(days().search("   ").is_empty());
}

#[test]
fn search_reports_each_name_once() {
    // Таня celebrates on 01-18 and on 12-27.
    let results = days().search("Тан");
    let tanya: Vec<_> = results.iter().filter(|r| r.name == "Таня").collect();
    assert_eq!(tanya.len(), 1);
    assert_eq!(tanya[0].date, "01-18");

    let names: HashSet<_> = results.iter().map(|r| &r.name).collect();
    assert_eq!(names.len(), results.len());
}

#[test]
fn builtin_dataset_shape() {
    let all = days().all();
    assert!(all.len() > 50);
    assert!(days().name_count() >= 500, "only {} names", days().name_count());
    for (date, entry) in &all {
        assert!(date.len() == 5 && date.as_bytes()[2] == b'-', "{date}");
        assert!(!entry.holiday.is_empty());
        for name in &entry.names {
            assert!(contains_cyrillic(name), "{name} is not Cyrillic");
            assert!(!transliterate(name).is_empty());
        }
    }
}

#[test]
fn all_returns_a_copy() {
    let mut all = days().all();
    all.clear();
    assert!(!days().all().is_empty());
}

#[test]
fn dataset_from_a_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "12-06": {{ "holiday": "Никулден", "names": ["Никола", "Нина"] }} }}"#
    )
    .unwrap();

    let loaded = NameDays::from_path(file.path()).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.name_day("Nina").unwrap().date, "12-06");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match NameDays::from_path(&path) {
        Err(NameDayError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}
