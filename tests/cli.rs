#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn prodcat(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("prodcat").unwrap();
    cmd.env("PRODCAT_HOME", home.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn lists_builtin_catalog_by_default() {
    let home = TempDir::new().unwrap();
    prodcat(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("ID"))
        .stdout(predicate::str::contains("Milk"))
        .stdout(predicate::str::contains("Socks"));
}

#[test]
fn query_narrows_the_table() {
    let home = TempDir::new().unwrap();
    prodcat(&home)
        .args(["list", "--query", "  APP "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Apple"))
        .stdout(predicate::str::contains("Pineapple"))
        .stdout(predicate::str::contains("Banana").not());
}

#[test]
fn user_and_categories_combine() {
    let home = TempDir::new().unwrap();
    prodcat(&home)
        .args(["list", "-u", "roma", "-c", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iPhone"))
        .stdout(predicate::str::contains("MacBook Pro"))
        .stdout(predicate::str::contains("Milk").not());
}

#[test]
fn repeated_category_toggles_off() {
    let home = TempDir::new().unwrap();
    prodcat(&home)
        .args(["list", "-c", "5", "-c", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Milk"));
}

#[test]
fn empty_result_prints_message() {
    let home = TempDir::new().unwrap();
    prodcat(&home)
        .args(["list", "--user", "John"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No products matching selected criteria",
        ));
}

#[test]
fn unknown_user_fails() {
    let home = TempDir::new().unwrap();
    prodcat(&home)
        .args(["list", "--user", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown user: Nobody"));
}

#[test]
fn users_marks_active_tab() {
    let home = TempDir::new().unwrap();
    prodcat(&home)
        .args(["users", "--user", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*   2  Anna"));
}

#[test]
fn reads_catalog_from_data_dir() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("users.json"),
        r#"[{ "id": 1, "name": "Roma", "sex": "m" }]"#,
    )
    .unwrap();
    fs::write(
        data.join("categories.json"),
        r#"[{ "id": 1, "title": "Fruits", "icon": "🍎", "ownerId": 1 }]"#,
    )
    .unwrap();
    fs::write(
        data.join("products.json"),
        r#"[{ "id": 1, "name": "Apple", "categoryId": 1 },
            { "id": 2, "name": "Banana", "categoryId": 1 }]"#,
    )
    .unwrap();

    prodcat(&home)
        .arg("--data-dir")
        .arg(&data)
        .args(["list", "-q", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🍎 - Fruits"))
        .stdout(predicate::str::contains("Banana").not());
}

#[test]
fn doctor_flags_dangling_references() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("broken");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("users.json"), "[]").unwrap();
    fs::write(
        data.join("categories.json"),
        r#"[{ "id": 1, "title": "Fruits", "icon": "🍎", "ownerId": 1 }]"#,
    )
    .unwrap();
    fs::write(
        data.join("products.json"),
        r#"[{ "id": 1, "name": "Apple", "categoryId": 2 }]"#,
    )
    .unwrap();

    prodcat(&home)
        .arg("--data-dir")
        .arg(&data)
        .arg("doctor")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Product 1 references unknown category 2",
        ))
        .stdout(predicate::str::contains(
            "Category 1 references unknown user 1",
        ));

    // Listing still works and shows placeholders.
    prodcat(&home)
        .arg("--data-dir")
        .arg(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(unknown)"));
}

#[test]
fn config_data_dir_is_used() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("empty");
    fs::create_dir_all(&data).unwrap();
    for file in ["users.json", "categories.json", "products.json"] {
        fs::write(data.join(file), "[]").unwrap();
    }

    prodcat(&home)
        .args(["config", "data-dir"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("data-dir set to"));

    prodcat(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No products matching selected criteria",
        ));
}

#[test]
fn browse_reads_commands_from_stdin() {
    let home = TempDir::new().unwrap();
    prodcat(&home)
        .arg("browse")
        .write_stdin("query hat\nuser max\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("query: \"hat\"  user: Max  categories: All"))
        .stdout(predicate::str::contains("Hat"));
}
