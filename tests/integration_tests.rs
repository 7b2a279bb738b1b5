mod common;
use common::{first_event_id, init_db_with_data, ndl, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    ndl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_events() {
    let db_path = setup_test_db("add_and_list_events");
    init_db_with_data(&db_path);

    ndl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leche"))
        .stdout(predicate::str::contains("Pañal"))
        .stdout(predicate::str::contains("120"))
        .stdout(predicate::str::contains("wet"));
}

#[test]
fn test_list_newest_first() {
    let db_path = setup_test_db("list_newest_first");
    init_db_with_data(&db_path);

    let out = ndl().args(["--db", &db_path, "list"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();

    let feeding_pos = stdout.find("09:00:00").expect("feeding row present");
    let diaper_pos = stdout.find("08:30:00").expect("diaper row present");
    assert!(feeding_pos < diaper_pos, "newest event should come first");
}

#[test]
fn test_list_category_filter_and_limit() {
    let db_path = setup_test_db("list_category_filter");
    init_db_with_data(&db_path);

    ndl()
        .args(["--db", &db_path, "list", "--category", "feeding"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leche"))
        .stdout(predicate::str::contains("Pañal").not());

    ndl()
        .args(["--db", &db_path, "list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pañal").not());
}

#[test]
fn test_add_rejects_unknown_category() {
    let db_path = setup_test_db("add_unknown_category");
    ndl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ndl()
        .args(["--db", &db_path, "add", "nap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_add_rejects_malformed_at_timestamp() {
    let db_path = setup_test_db("add_bad_at");
    ndl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ndl()
        .args(["--db", &db_path, "add", "feeding", "--at", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timestamp"));
}

#[test]
fn test_del_removes_an_event_after_confirmation() {
    let db_path = setup_test_db("del_confirmed");
    init_db_with_data(&db_path);

    let id = first_event_id(&db_path);
    ndl()
        .args(["--db", &db_path, "del", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("has been deleted"));

    ndl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&id).not());
}

#[test]
fn test_del_declined_at_the_prompt_keeps_the_event() {
    let db_path = setup_test_db("del_declined");
    init_db_with_data(&db_path);

    let id = first_event_id(&db_path);
    ndl()
        .args(["--db", &db_path, "del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled"));

    ndl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&id));
}

#[test]
fn test_del_warns_when_no_event_matches_the_id() {
    let db_path = setup_test_db("del_missing_id");
    init_db_with_data(&db_path);

    ndl()
        .args(["--db", &db_path, "del", "no-such-id", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No event found"));
}

#[test]
fn test_clear_declined_at_the_prompt_keeps_the_log() {
    let db_path = setup_test_db("clear_declined");
    init_db_with_data(&db_path);

    ndl()
        .args(["--db", &db_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled"));

    ndl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leche"))
        .stdout(predicate::str::contains("Pañal"));
}

#[test]
fn test_clear_wipes_the_log() {
    let db_path = setup_test_db("clear_wipes_log");
    init_db_with_data(&db_path);

    ndl()
        .args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 event(s) deleted"));

    ndl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events recorded"));
}

#[test]
fn test_config_prints_defaults() {
    let db_path = setup_test_db("config_prints");
    ndl()
        .args(["--db", &db_path, "--test", "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("intervals"))
        .stdout(predicate::str::contains("feeding"));
}
