//! Tests for the `onec-cfg2md` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn cfg2md() -> Command {
    Command::new(env!("CARGO_BIN_EXE_onec-cfg2md"))
}

#[test]
fn test_converts_cfg_fixture() {
    let out = tempdir().unwrap();

    cfg2md()
        .arg(fixture("cfg"))
        .arg(out.path())
        .args(["--types", "documents,constants"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Format: cfg"))
        .stdout(predicate::str::contains("Objects: 4"));

    assert!(out.path().join("Документ_Заказ.md").is_file());
    assert!(out.path().join("Константа_УчетПоСкладам.md").is_file());
    let catalog = fs::read_to_string(out.path().join("objects.csv")).unwrap();
    assert_eq!(catalog.lines().count(), 5);
}

#[test]
fn test_pinned_edt_format() {
    let out = tempdir().unwrap();

    cfg2md()
        .arg(fixture("edt"))
        .arg(out.path())
        .args(["--format", "EDT", "--types", "filtercriteria"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Format: edt"));

    let page =
        fs::read_to_string(out.path().join("КритерийОтбора_ДокументыКонтрагента.md")).unwrap();
    assert!(page.contains("## Состав\n\n- Документ.Заказ.Реквизит.Контрагент\n"));
}

#[test]
fn test_verbose_lists_written_pages() {
    let out = tempdir().unwrap();

    cfg2md()
        .arg(fixture("cfg"))
        .arg(out.path())
        .args(["--types", "enums", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Перечисление_СостоянияЗаказов.md"));

    cfg2md()
        .arg(fixture("cfg"))
        .arg(out.path())
        .args(["--types", "enums"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Перечисление_СостоянияЗаказов.md").not());
}

#[test]
fn test_unknown_format_fails() {
    let out = tempdir().unwrap();

    cfg2md()
        .arg(fixture("cfg"))
        .arg(out.path())
        .args(["--format", "xml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Unsupported format: 'xml'"));
}

#[test]
fn test_unknown_type_fails() {
    let out = tempdir().unwrap();

    cfg2md()
        .arg(fixture("cfg"))
        .arg(out.path())
        .args(["--types", "documents,widgets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported object type: 'widgets'"));
}

#[test]
fn test_missing_source_fails() {
    let out = tempdir().unwrap();

    cfg2md()
        .arg(out.path().join("absent"))
        .arg(out.path().join("docs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_no_objects_notice() {
    let src = tempdir().unwrap();
    fs::write(src.path().join("Configuration.xml"), "<MetaDataObject/>").unwrap();
    let out = tempdir().unwrap();

    cfg2md()
        .arg(src.path())
        .arg(out.path().join("docs"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No objects found"));

    assert!(!out.path().join("docs").exists());
}
