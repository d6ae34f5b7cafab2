//! CLI integration tests.

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CATALOG: &str = r#"[
    {"id":"1","name":"Running Shoe","price":"120.00","image":"https://img/1.png","description":"Light trainer","createdAt":"2023-07-17T07:21:02.529Z"},
    {"id":"2","name":"Sun Hat","price":"25,50","image":"https://img/2.png","description":"Wide brim","brand":"Acme"},
    {"id":"3","name":"shoe polish","price":"4.99","image":"https://img/3.png","description":"Black"}
]"#;

fn emarket() -> Command {
    let mut cmd = cargo_bin_cmd!("emarket");
    cmd.env_remove("EMARKET_CATALOG_URL")
        .env_remove("EMARKET_DATABASE")
        .env_remove("RUST_LOG");
    cmd
}

/// Serve `body` to every request on a background thread.
fn serve_catalog(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind catalog server");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}/products")
}

fn write_config(dir: &Path, catalog_url: &str) -> PathBuf {
    let path = dir.join("config.toml");
    let database = dir.join("emarket.db");
    let contents = format!(
        "database = \"{}\"\n\n[catalog]\nurl = \"{catalog_url}\"\ntimeout_ms = 2000\nconnect_timeout_ms = 1000\n",
        database.display()
    );
    fs::write(&path, contents).expect("write config");
    path
}

fn setup() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = serve_catalog("200 OK", CATALOG);
    let config = write_config(dir.path(), &url);
    (dir, config)
}

#[test]
fn test_help() {
    emarket()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("emarket"))
        .stdout(predicate::str::contains("products"))
        .stdout(predicate::str::contains("favorites"))
        .stdout(predicate::str::contains("cart"));
}

#[test]
fn test_version() {
    emarket()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("emarket"));
}

#[test]
fn config_validate_accepts_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "https://example.com/products");

    emarket()
        .args(["config", "validate", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_rejects_zero_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[catalog]\ntimeout_ms = 0\n").unwrap();

    emarket()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog.timeout_ms"));
}

#[test]
fn config_show_json_reflects_env_override() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "https://example.com/products");

    emarket()
        .env("EMARKET_CATALOG_URL", "http://127.0.0.1:1/override")
        .args(["--json", "config", "show", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:1/override"));
}

#[test]
fn missing_config_file_fails() {
    emarket()
        .args(["config", "show", "--config", "/nonexistent/emarket.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn products_lists_and_filters_catalog() {
    let (_dir, config) = setup();

    emarket()
        .args(["products", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Running Shoe"))
        .stdout(predicate::str::contains("25.50 ₺"));

    emarket()
        .args(["--json", "products", "--search", "SHOE", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("shoe polish"))
        .stdout(predicate::str::contains("Sun Hat").not());
}

#[test]
fn favorite_round_trip_through_database() {
    let (_dir, config) = setup();

    emarket()
        .args(["favorite", "2", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Sun Hat to favorites"));

    emarket()
        .args(["--json", "favorites", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sun Hat"));

    emarket()
        .args(["--json", "show", "2", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""is_favorite":true"#));

    emarket()
        .args(["unfavorite", "2", "--config"])
        .arg(&config)
        .assert()
        .success();

    emarket()
        .args(["--json", "favorites", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sun Hat").not());
}

#[test]
fn cart_add_twice_then_decrease_to_empty() {
    let (_dir, config) = setup();

    for _ in 0..2 {
        emarket()
            .args(["cart", "add", "1", "--config"])
            .arg(&config)
            .assert()
            .success();
    }

    emarket()
        .args(["--json", "cart", "list", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""quantity":2"#))
        .stdout(predicate::str::contains(r#""total":"240.00""#));

    for _ in 0..2 {
        emarket()
            .args(["cart", "decrease", "1", "--config"])
            .arg(&config)
            .assert()
            .success();
    }

    emarket()
        .args(["cart", "list", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("(cart is empty)"));

    emarket()
        .args(["cart", "increase", "1", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cart item not found: 1"));
}

#[test]
fn unknown_product_is_an_error() {
    let (_dir, config) = setup();

    emarket()
        .args(["show", "99", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("product not found: 99"));
}

#[test]
fn catalog_server_error_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let url = serve_catalog("503 Service Unavailable", "[]");
    let config = write_config(dir.path(), &url);

    emarket()
        .args(["products", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP error"));
}
