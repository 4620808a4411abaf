//! Scan Pipeline Tests
//!
//! End-to-end coverage for the text → table pipeline: comment stripping,
//! structural scanning, signature extraction, and archive loading.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;

use zscript::base::SourceUnit;
use zscript::parser::scan_unit;
use zscript::symbols::SignatureTable;
use zscript::AnalysisHost;

const TWO_FUNCTION_CLASS: &str = "class Foo\n{\n  native void Bar(int x, string y = \"z\");\n  virtual int Baz() { return 0; }\n}\n";

fn scan(text: &str) -> SignatureTable {
    let mut table = SignatureTable::new();
    scan_unit(&SourceUnit::new("test.zs", text), &mut table);
    table
}

#[test]
fn test_two_function_source_block() {
    let table = scan(TWO_FUNCTION_CLASS);
    assert_eq!(table.len(), 2, "exactly the two declarations are extracted");

    let bar = table.lookup("bar").expect("bar should be present");
    assert_eq!(bar.label, "void Bar(int x, string y = \"z\")");
    assert_eq!(bar.documentation, "defined in class Foo");

    let baz = table.lookup("baz").expect("baz should be present");
    assert_eq!(baz.label, "int Baz()");

    // Neither the body statement nor the class header line leaks in.
    assert!(table.lookup("return").is_none());
    assert!(table.lookup("Foo").is_none());
}

#[test]
fn test_rescan_is_a_no_op_for_unchanged_input() {
    let mut table = SignatureTable::new();
    let unit = SourceUnit::new("foo.zs", TWO_FUNCTION_CLASS);
    scan_unit(&unit, &mut table);
    let before: Vec<_> = table.iter().cloned().collect();
    scan_unit(&unit, &mut table);
    let after: Vec<_> = table.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_declaration_spanning_many_physical_lines() {
    let text = "class Spawner {\n  native Actor SpawnMissileXYZ(double x,\n    double y,\n    double z,\n    Actor dest,\n    class<Actor> kind);\n}\n";
    let table = scan(text);
    assert_eq!(table.len(), 1, "five physical lines collapse to one match");
    let sig = table.lookup("spawnmissilexyz").unwrap();
    assert_eq!(sig.parameters.len(), 5);
    assert_eq!(sig.parameters[4].param_type, "class<Actor>");
    assert_eq!(sig.parameters[4].name, "kind");
}

#[test]
fn test_depth_is_clamped_on_unbalanced_input() {
    // Closers with no opener must not corrupt the parse of later text.
    let text = "}\n}\n}\nclass Late {\n  void StillFound();\n}\n";
    let table = scan(text);
    assert_eq!(table.lookup("stillfound").unwrap().documentation, "defined in class Late");
}

#[test]
fn test_comments_stripped_before_structure() {
    let text = "class Foo {\n  /* void NotReal(int x);\n  also not real */\n  // void AlsoNot(int y);\n  void Real(int z);\n}\n";
    let table = scan(text);
    assert_eq!(table.len(), 1);
    assert!(table.lookup("real").is_some());
}

#[test]
fn test_archive_scan_filters_and_populates() {
    let mut file = tempfile::NamedTempFile::new().expect("temp archive");
    {
        let mut writer = zip::ZipWriter::new(&mut file);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);

        writer
            .start_file("zscript/actors/actor.zs", options)
            .unwrap();
        writer
            .write_all(b"class Actor {\n  native void Thrust(double speed, double angle);\n}\n")
            .unwrap();

        writer.start_file("zscript/constants.zs", options).unwrap();
        writer
            .write_all(b"class Constants {\n  static int Clamp(int v, int lo, int hi);\n}\n")
            .unwrap();

        // Must be skipped: auxiliary text file and out-of-tree entry.
        writer.start_file("zscript/license.txt", options).unwrap();
        writer.write_all(b"void NotCode();").unwrap();
        writer.start_file("mapinfo/common.zs", options).unwrap();
        writer
            .write_all(b"class Outside {\n  void NotScanned();\n}\n")
            .unwrap();

        writer.finish().unwrap();
    }

    let host = AnalysisHost::new();
    let found = host.scan_archive(file.path()).expect("archive should scan");
    assert_eq!(found, 2);
    assert!(host.lookup("thrust").is_some());
    assert!(host.lookup("clamp").is_some());
    assert!(host.lookup("notcode").is_none());
    assert!(host.lookup("notscanned").is_none());
}

#[test]
fn test_archive_rescan_replaces_previous_contents() {
    let mut file = tempfile::NamedTempFile::new().expect("temp archive");
    {
        let mut writer = zip::ZipWriter::new(&mut file);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        writer.start_file("zscript/base.zs", options).unwrap();
        writer
            .write_all(b"class Base {\n  void OnlyInArchive();\n}\n")
            .unwrap();
        writer.finish().unwrap();
    }

    let host = AnalysisHost::new();
    host.scan_text("stale.zs", "class Stale {\n  void Leftover();\n}\n");
    assert!(host.lookup("leftover").is_some());

    host.scan_archive(file.path()).expect("archive should scan");
    assert!(host.lookup("leftover").is_none(), "bulk re-scan clears first");
    assert!(host.lookup("onlyinarchive").is_some());
}

#[test]
fn test_missing_archive_leaves_table_untouched() {
    let host = AnalysisHost::new();
    host.scan_text("doc.zs", "class Doc {\n  void Keep();\n}\n");
    // The configured-path error surfaces before any table mutation.
    let settings = zscript::project::Settings::default();
    let err = host.scan_configured_archive(&settings).unwrap_err();
    assert!(matches!(err, zscript::Error::MissingArchivePath));
    assert!(host.lookup("keep").is_some());
}
