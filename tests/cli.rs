use {
    assert_cmd::Command,
    predicates::prelude::*,
    std::io::Write,
};

fn zip_range() -> Command {
    Command::cargo_bin("zip-range").unwrap()
}

#[test]
fn prints_consolidated_ranges() {
    zip_range()
        .args(&["[94133,94133]", "[94200,94299]", "[94226,94399]"])
        .assert()
        .success()
        .stdout("[94133,94133] [94200,94399]\n");
}

#[test]
fn splits_arguments_on_whitespace() {
    zip_range()
        .arg("[00011,00019] [00001,00010]\t[00020,00030]")
        .assert()
        .success()
        .stdout("[00001,00030]\n");
}

#[test]
fn ignores_malformed_pairs() {
    zip_range()
        .args(&["[0, 2]", "[12345,6789]", "[00005,00001]"])
        .assert()
        .success()
        .stdout("[00001,00005]\n");
}

#[test]
fn reads_ranges_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[00040,00050] [00045,00055]").unwrap();
    writeln!(file, "[00070,00080] [00060,00090]").unwrap();

    zip_range()
        .arg(file.path())
        .arg("[99999,99999]")
        .assert()
        .success()
        .stdout("[00040,00055] [00060,00090] [99999,99999]\n");
}

#[test]
fn no_ranges_prints_empty_line() {
    zip_range().assert().success().stdout("\n");
}

#[test]
fn verbose_logs_to_stderr() {
    zip_range()
        .args(&["-v", "[00001,00005]", "[00006,00010]"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("[00001,00010]\n")
        .stderr(predicate::str::contains("Consolidated ranges"));
}
