use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn doctestpp() -> Command {
    Command::cargo_bin("doctestpp").unwrap()
}

fn setup_project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, content) in files {
        let full_path = dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
    dir
}

#[test]
fn test_check_passes() {
    let dir = setup_project(&[
        ("a.h", "/* @test(A) @endtest */\n"),
        ("b.cpp", "const char *s = \"/* @test(Nope\";\n"),
    ]);

    doctestpp()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("1 tests in 2 files"));
}

#[test]
fn test_check_fails_with_location() {
    let dir = setup_project(&[(
        "bad.h",
        "// header\n\n/*\n * @test(T, suite=\"unterminated)\n * @endtest\n */\n",
    )]);

    doctestpp()
        .current_dir(dir.path())
        .args(["check", "bad.h"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL"))
        .stdout(predicate::str::contains(
            "bad.h:4: error: missing argument or closing parenthesis in @test",
        ));
}

#[test]
fn test_check_isolates_files() {
    let dir = setup_project(&[
        ("a.h", "/* @test(A) */\n"),
        ("b.h", "/* @test(B) @endtest */\n"),
        ("c.h", "/* @test(C, x) @endtest */\n"),
    ]);

    doctestpp()
        .args(["check", dir.path().to_str().unwrap(), "--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"passed\": false"))
        .stdout(predicate::str::contains("\"tests_found\": 1"))
        .stdout(predicate::str::contains("\"files_scanned\": 3"))
        .stdout(predicate::str::contains("did not find a terminating @endtest"))
        .stdout(predicate::str::contains(
            "missing argument or closing parenthesis in @test",
        ));
}

#[test]
fn test_check_escaped_end_marker() {
    let dir = setup_project(&[("a.h", "/* @test(A) puts(\"@@endtest\"); */\n")]);

    doctestpp()
        .current_dir(dir.path())
        .args(["check", "a.h"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("did not find a terminating @endtest"));
}

#[test]
fn test_check_unterminated_comment_passes() {
    let dir = setup_project(&[("a.h", "int x; /* @test(A) @endtest\n")]);

    doctestpp()
        .current_dir(dir.path())
        .args(["check", "a.h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 tests in 1 files"));
}

#[test]
fn test_check_github_actions_format() {
    let dir = setup_project(&[("a.h", "/* @test(A) */\n")]);

    doctestpp()
        .current_dir(dir.path())
        .args(["check", "a.h", "--format", "github-actions"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "::error file=a.h,line=1,title=doctestpp::did not find a terminating @endtest",
        ));
}

#[test]
fn test_check_missing_path() {
    let dir = TempDir::new().unwrap();

    doctestpp()
        .current_dir(dir.path())
        .args(["check", "missing"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no such file or directory: missing"));
}

#[test]
fn test_check_invalid_config() {
    let dir = setup_project(&[("a.h", ""), (".doctestpp.toml", "bogus = 1\n")]);

    doctestpp()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_check_non_utf8_file_is_scanned() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("a.h"),
        b"/* caf\xe9 */\n/* @test(Broken, x) @endtest */\n",
    )
    .unwrap();

    doctestpp()
        .current_dir(dir.path())
        .args(["check", "a.h"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL"))
        .stdout(predicate::str::contains(
            "a.h:2: error: missing argument or closing parenthesis in @test",
        ))
        .stdout(predicate::str::contains("0 tests in 1 files"));
}

#[test]
fn test_check_non_utf8_file_passes_when_valid() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("a.h"),
        b"/* \xff\xfe */\n/* @test(Fine) @endtest */\n",
    )
    .unwrap();

    doctestpp()
        .current_dir(dir.path())
        .args(["check", "a.h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 tests in 1 files"));
}
