use assert_cmd::Command;
use predicates::prelude::*;

fn stocklist() -> Command {
    let mut cmd = Command::cargo_bin("stocklist").expect("binary builds");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn lists_the_demo_inventory() {
    stocklist()
        .write_stdin("1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Laptop"))
        .stdout(predicate::str::contains("Mouse"))
        .stdout(predicate::str::contains("Keyboard"))
        .stdout(predicate::str::contains("Monitor"))
        .stdout(predicate::str::contains("4 products in stock."));
}

#[test]
fn starts_empty_when_asked() {
    stocklist()
        .arg("--empty")
        .write_stdin("1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."))
        .stdout(predicate::str::contains("0 products in stock."));
}

#[test]
fn adds_a_product() {
    stocklist()
        .arg("--empty")
        .write_stdin("2\nWebcam\n25.5\n4\n1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added: Webcam"))
        .stdout(predicate::str::contains("1 product in stock."));
}

#[test]
fn rejects_a_duplicate_name() {
    stocklist()
        .write_stdin("2\nMouse\n5\n2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Product already exists: Mouse"));
}

#[test]
fn rejects_a_negative_quantity() {
    stocklist()
        .write_stdin("2\nWebcam\n5\n-2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "quantity must be a non-negative integer",
        ));
}

#[test]
fn filters_below_a_price() {
    stocklist()
        .write_stdin("6\n25\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Laptop"))
        .stdout(predicate::str::contains("Monitor"))
        .stdout(predicate::str::contains("Mouse").not());
}

#[test]
fn filters_below_a_quantity() {
    stocklist()
        .write_stdin("7\n10\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mouse"))
        .stdout(predicate::str::contains("Keyboard").not());
}

#[test]
fn reports_a_missing_product() {
    stocklist()
        .write_stdin("5\nPrinter\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Product not found: Printer"));
}

#[test]
fn updates_a_product_keeping_unspecified_fields() {
    // Rename Mouse, keep its price and quantity, then find it.
    stocklist()
        .write_stdin("4\nMouse\nTrackball\n\n\n5\nTrackball\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Product updated: Trackball"))
        .stdout(predicate::str::contains("50.00"));
}

#[test]
fn undo_restores_the_prior_inventory() {
    stocklist()
        .write_stdin("3\nMouse\n8\n1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Product removed: Mouse"))
        .stdout(predicate::str::contains("Reverted the last change."))
        .stdout(predicate::str::contains("4 products in stock."));
}

#[test]
fn renders_json_when_asked() {
    stocklist()
        .arg("--json")
        .write_stdin("1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Laptop\""))
        .stdout(predicate::str::contains("\"price\": 10.0"));
}
