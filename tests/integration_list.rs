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
fn test_list_finds_tests() {
    let dir = setup_project(&[
        (
            "src/math.h",
            "/**\n * @test(Adds, suite=\"Math\")\n * CHECK(1 + 1 == 2);\n * @endtest\n */\n",
        ),
        ("src/str.cpp", "/* @test(Concat) @endtest */\n"),
        ("README.md", "/* @test(Ignored) @endtest */\n"),
    ]);

    doctestpp()
        .args(["list", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("L2: Adds (suite=Math)"))
        .stdout(predicate::str::contains("L1: Concat"))
        .stdout(predicate::str::contains("Ignored").not())
        .stdout(predicate::str::contains("2 tests in 2 files"));
}

#[test]
fn test_list_alias_ls_and_default_path() {
    let dir = setup_project(&[("a.h", "/* @test(One) @endtest */\n")]);

    doctestpp()
        .current_dir(dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("One"))
        .stdout(predicate::str::contains("1 tests in 1 files"));
}

#[test]
fn test_list_json_format() {
    let dir = setup_project(&[(
        "a.h",
        "/* @test(Json, fixture=\"Fx\") @endtest */\n",
    )]);

    doctestpp()
        .args(["list", dir.path().to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Json\""))
        .stdout(predicate::str::contains("\"fixture\": \"Fx\""))
        .stdout(predicate::str::contains("\"files_scanned\": 1"));
}

#[test]
fn test_list_continues_past_broken_file() {
    let dir = setup_project(&[
        ("a.h", "/* @test(Broken) never closed */\n"),
        ("b.h", "/* @test(Fine) @endtest */\n"),
    ]);

    doctestpp()
        .args(["list", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fine"))
        .stdout(predicate::str::contains("did not find a terminating @endtest"));
}

#[test]
fn test_list_respects_exclude_dirs() {
    let dir = setup_project(&[
        ("build/gen.h", "/* @test(Generated) @endtest */\n"),
        ("src/a.h", "/* @test(Kept) @endtest */\n"),
        (".doctestpp.toml", "exclude_dirs = [\"build\"]\n"),
    ]);

    doctestpp()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept"))
        .stdout(predicate::str::contains("Generated").not());
}

#[test]
fn test_list_github_actions_format() {
    let dir = setup_project(&[("a.h", "/* @test(Gh) @endtest */\n")]);

    doctestpp()
        .current_dir(dir.path())
        .args(["list", "a.h", "--format", "github-actions"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "::notice file=a.h,line=1,title=doctestpp::@test(Gh)",
        ));
}
