use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{ANA, BEA, SUP, esc_as, seeded_db, setup_test_db, temp_out, write_sample_dump};

#[test]
fn test_init_creates_schema_and_default_settings() {
    let db_path = setup_test_db("cli_init");

    esc_as(&db_path, SUP)
        .args(["init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    esc_as(&db_path, SUP)
        .args(["settings"])
        .assert()
        .success()
        .stdout(contains("Points per day : 2"))
        .stdout(contains("300.00 €"));
}

#[test]
fn test_import_reports_rows_and_index() {
    let db_path = setup_test_db("cli_import");
    let dump = write_sample_dump("cli_import");

    esc_as(&db_path, SUP).args(["init"]).assert().success();

    esc_as(&db_path, SUP)
        .args(["import", "--file", &dump])
        .assert()
        .success()
        .stdout(contains("Imported 3 users, 3 entry types, 5 entries, 2 holidays"))
        .stdout(contains("Entradas=5"));
}

#[test]
fn test_import_over_existing_data_requires_supervisor() {
    let db_path = seeded_db("cli_import_member");
    let dump = write_sample_dump("cli_import_member_again");

    esc_as(&db_path, ANA)
        .args(["import", "--file", &dump])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));
}

#[test]
fn test_add_entry_and_duplicate_case_is_refused() {
    let db_path = seeded_db("cli_add_dup");

    esc_as(&db_path, ANA)
        .args(["add", "2024-02-20", "C-9", "t1", "--comment", "first"])
        .assert()
        .success()
        .stdout(contains("case 'C-9'"))
        .stdout(contains("2.00 pts"));

    // same case, same month
    esc_as(&db_path, ANA)
        .args(["add", "2024-02-21", "C-9", "t2"])
        .assert()
        .failure()
        .stderr(contains("already registered for 2024-02"));

    // same case, next month is fine
    esc_as(&db_path, ANA)
        .args(["add", "2024-03-04", "C-9", "t2"])
        .assert()
        .success();

    // another user may reuse the case reference
    esc_as(&db_path, BEA)
        .args(["add", "2024-02-21", "C-9", "t1"])
        .assert()
        .success();
}

#[test]
fn test_add_rejects_inactive_type_and_bad_date() {
    let db_path = seeded_db("cli_add_invalid");

    esc_as(&db_path, ANA)
        .args(["add", "2024-02-20", "C-1", "t3"])
        .assert()
        .failure()
        .stderr(contains("inactive"));

    esc_as(&db_path, ANA)
        .args(["add", "2024-02-30", "C-1", "t1"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    esc_as(&db_path, ANA)
        .args(["add", "2024-02-20", "C-1", "nope"])
        .assert()
        .failure()
        .stderr(contains("Entry type not found"));
}

#[test]
fn test_unknown_user_is_enrolled_as_member() {
    let db_path = seeded_db("cli_enroll");

    esc_as(&db_path, "new.person@firm.es")
        .args(["add", "2024-02-20", "N-1", "t1"])
        .assert()
        .success()
        .stdout(contains("Registered new user new.person@firm.es"));

    esc_as(&db_path, SUP)
        .args(["user", "list"])
        .assert()
        .success()
        .stdout(contains("new.person"))
        .stdout(contains("member"));

    // members cannot manage users
    esc_as(&db_path, "new.person@firm.es")
        .args(["user", "edit", "u2", "--role", "supervisor"])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));
}

#[test]
fn test_edit_permissions() {
    let db_path = seeded_db("cli_edit");

    // bea cannot touch ana's entry
    esc_as(&db_path, BEA)
        .args(["edit", "e1", "--comment", "mine now"])
        .assert()
        .failure()
        .stderr(contains("cannot modify"));

    // the owner can
    esc_as(&db_path, ANA)
        .args(["edit", "e1", "--comment", "checked"])
        .assert()
        .success()
        .stdout(contains("Entry e1 updated"));

    // a supervisor can; moving A-1 onto A-2's case collides
    esc_as(&db_path, SUP)
        .args(["edit", "e1", "--case", "A-2"])
        .assert()
        .failure()
        .stderr(contains("already registered"));

    // re-typing re-snapshots the points
    esc_as(&db_path, SUP)
        .args(["edit", "e1", "--type", "t2"])
        .assert()
        .success()
        .stdout(contains("3.00 pts"));
}

#[test]
fn test_del_entry() {
    let db_path = seeded_db("cli_del");

    esc_as(&db_path, BEA)
        .args(["del", "e1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("cannot modify"));

    esc_as(&db_path, ANA)
        .args(["del", "e1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    esc_as(&db_path, ANA)
        .args(["del", "e1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Entry not found"));
}

#[test]
fn test_history_is_scoped_to_the_actor() {
    let db_path = seeded_db("cli_history");

    esc_as(&db_path, ANA)
        .args(["history", "--from", "2024-02-01", "--to", "2024-02-29"])
        .assert()
        .success()
        .stdout(contains("A-1").and(contains("A-2")))
        .stdout(contains("B-1").not())
        .stdout(contains("A-0").not())
        .stdout(contains("2 entries"));

    esc_as(&db_path, SUP)
        .args(["history", "--type", "t2"])
        .assert()
        .success()
        .stdout(contains("A-2").and(contains("B-1")))
        .stdout(contains("A-1").not());
}

#[test]
fn test_ranking_requires_supervisor_and_ranks_by_points() {
    let db_path = seeded_db("cli_ranking");

    esc_as(&db_path, ANA)
        .args(["ranking", "--month", "2024-02"])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));

    let out = esc_as(&db_path, SUP)
        .args(["ranking", "--month", "2024-02"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);

    let ana = text.find("ana@firm.es").expect("ana row");
    let bea = text.find("bea@firm.es").expect("bea row");
    let sup = text.find("sup@firm.es").expect("sup row");
    assert!(ana < bea && bea < sup, "unexpected order:\n{text}");

    // 5 pts over 20 working days at 2 pts/day
    assert!(text.contains("13%"), "{text}");
    assert!(text.contains("0 eligible"), "{text}");
}

#[test]
fn test_ranking_rejects_malformed_month() {
    let db_path = seeded_db("cli_ranking_month");

    esc_as(&db_path, SUP)
        .args(["ranking", "--month", "2024-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_export_csv() {
    let db_path = seeded_db("cli_export_csv");
    let out = temp_out("cli_export_csv", "csv");

    esc_as(&db_path, SUP)
        .args(["export", "--format", "csv", "--file", &out, "--month", "2024-02"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], r#""Pos","User","Points","Entries","% Goal","Bonus (€)""#);
    assert_eq!(lines[1], r#""1","Ana","5.00","2","13%","0.00""#);
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_export_json_user_scope() {
    let db_path = seeded_db("cli_export_json");
    let out = temp_out("cli_export_json", "json");

    esc_as(&db_path, SUP)
        .args([
            "export", "--format", "json", "--file", &out, "--month", "2024-02", "--scope", "user",
            "--user", BEA,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("json written");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(v["month"], "2024-02");
    let ranking = v["ranking"].as_array().expect("ranking array");
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0]["email"], BEA);
    // legacy entry without snapshot falls back to the type's 3 pts
    assert_eq!(ranking[0]["points"], 3.0);
}

#[test]
fn test_export_user_scope_needs_user() {
    let db_path = seeded_db("cli_export_scope");
    let out = temp_out("cli_export_scope", "csv");

    esc_as(&db_path, SUP)
        .args(["export", "--file", &out, "--month", "2024-02", "--scope", "user"])
        .assert()
        .failure()
        .stderr(contains("--user"));
}

#[test]
fn test_export_pdf_and_xlsx() {
    let db_path = seeded_db("cli_export_pdf");
    let pdf = temp_out("cli_export_pdf", "pdf");
    let xlsx = temp_out("cli_export_pdf", "xlsx");

    esc_as(&db_path, SUP)
        .args(["export", "--format", "pdf", "--file", &pdf, "--month", "2024-02"])
        .assert()
        .success();
    let bytes = fs::read(&pdf).expect("pdf written");
    assert!(bytes.starts_with(b"%PDF"));

    esc_as(&db_path, SUP)
        .args(["export", "--format", "xlsx", "--file", &xlsx, "--month", "2024-02"])
        .assert()
        .success();
    let bytes = fs::read(&xlsx).expect("xlsx written");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let db_path = seeded_db("cli_export_force");
    let out = temp_out("cli_export_force", "csv");
    fs::write(&out, "keep me").unwrap();

    esc_as(&db_path, SUP)
        .args(["export", "--file", &out, "--month", "2024-02"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    esc_as(&db_path, SUP)
        .args(["export", "--file", &out, "--month", "2024-02", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("\"Pos\""));
}

#[test]
fn test_type_management() {
    let db_path = seeded_db("cli_types");

    esc_as(&db_path, SUP)
        .args(["type", "del", "t1"])
        .assert()
        .failure()
        .stderr(contains("referenced by existing entries"));

    esc_as(&db_path, SUP)
        .args(["type", "edit", "t1", "--active", "false"])
        .assert()
        .success()
        .stdout(contains("[inactive]"));

    esc_as(&db_path, ANA)
        .args(["type", "list"])
        .assert()
        .success()
        .stdout(contains("Recurso"))
        .stdout(contains("Demanda").not());

    esc_as(&db_path, ANA)
        .args(["type", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Demanda"));

    esc_as(&db_path, SUP)
        .args(["type", "add", "--name", "Escrito breve", "--points", "0,5"])
        .assert()
        .success()
        .stdout(contains("Escrito breve (0.5 pts)"));

    esc_as(&db_path, SUP)
        .args(["type", "del", "t3"])
        .assert()
        .success();
}

#[test]
fn test_type_edit_does_not_change_existing_snapshots() {
    let db_path = seeded_db("cli_type_snapshot");

    esc_as(&db_path, SUP)
        .args(["type", "edit", "t1", "--points", "10"])
        .assert()
        .success();

    // A-1 keeps its 2 pts: 2 + 3 = 5
    esc_as(&db_path, SUP)
        .args(["ranking", "--month", "2024-02", "--user", ANA])
        .assert()
        .success()
        .stdout(contains("5.00"));
}

#[test]
fn test_holidays_and_settings() {
    let db_path = seeded_db("cli_holidays");

    esc_as(&db_path, SUP)
        .args(["holiday", "list", "--month", "2024-02", "--site", "madrid"])
        .assert()
        .success()
        .stdout(contains("2024-02-14"))
        .stdout(contains("2024-02-28").not());

    esc_as(&db_path, ANA)
        .args(["holiday", "add", "2024-02-15"])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));

    esc_as(&db_path, SUP)
        .args(["holiday", "add", "2024-02-15", "--site", "Madrid", "--description", "Local"])
        .assert()
        .success();

    esc_as(&db_path, SUP)
        .args(["holiday", "del", "2024-02-15", "--site", "madrid"])
        .assert()
        .success()
        .stdout(contains("removed"));

    esc_as(&db_path, SUP)
        .args(["settings", "--points-per-day", "0"])
        .assert()
        .failure()
        .stderr(contains("greater than 0"));

    esc_as(&db_path, SUP)
        .args(["settings", "--points-per-day", "1", "--bonus", "150"])
        .assert()
        .success()
        .stdout(contains("150.00 €"));
}

#[test]
fn test_dashboard() {
    let db_path = seeded_db("cli_dashboard");

    esc_as(&db_path, ANA)
        .args(["dashboard", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(contains("Monthly target : 40.00 (20 working days"))
        .stdout(contains("Behind"))
        .stdout(contains("A-2"));
}

#[test]
fn test_log_print() {
    let db_path = seeded_db("cli_log");

    esc_as(&db_path, ANA)
        .args(["log", "--print"])
        .assert()
        .failure();

    esc_as(&db_path, SUP)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("import"));
}
