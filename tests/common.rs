#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SUP: &str = "sup@firm.es";
pub const ANA: &str = "ana@firm.es";
pub const BEA: &str = "bea@firm.es";

pub fn esc() -> Command {
    cargo_bin_cmd!("escritos")
}

/// Command bound to a test database, acting as `email`.
pub fn esc_as(db_path: &str, email: &str) -> Command {
    let mut cmd = esc();
    cmd.args(["--db", db_path, "--test", "--as", email]);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_escritos.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Workbook dump for February 2024.
///
/// - sup (supervisor, madrid), ana (member, madrid, vacation on a Saturday),
///   bea (legacy role "usuario", barcelona)
/// - types t1 = 2 pts, t2 = 3 pts, t3 inactive
/// - ana: 2 + 3 pts in February plus one entry on each side of the month
/// - bea: one legacy entry without a points snapshot (falls back to t2 = 3)
/// - holidays: 2024-02-14 for every site, 2024-02-28 for barcelona
pub fn sample_dump() -> serde_json::Value {
    serde_json::json!({
        "Usuarios": { "value": [
            { "index": 0, "values": [["u1", "Sup", "SUP@firm.es", "supervisor", "Madrid", ""]] },
            { "index": 1, "values": [["u2", "Ana", "ana@firm.es", "member", "madrid", "2024-02-10"]] },
            { "index": 2, "values": [["u3", "Bea", "bea@firm.es", "usuario", "Barcelona", ""]] }
        ]},
        "TiposEscritos": { "value": [
            { "index": 0, "values": [["t1", "Demanda", 2, true]] },
            { "index": 1, "values": [["t2", "Recurso", "3", "TRUE"]] },
            { "index": 2, "values": [["t3", "Antiguo", 1, "false"]] }
        ]},
        "Configuracion": { "value": [
            { "index": 0, "values": [[2, 300, "2024-01-01"]] }
        ]},
        "Entradas": { "value": [
            { "index": 0, "values": [["e1", "Ana", "ana@firm.es", "2024-02-01", "A-1", "t1", 2, ""]] },
            { "index": 1, "values": [["e2", "Ana", "ANA@firm.es", "2/2/2024", "A-2", "t2", "3", "urgent"]] },
            { "index": 2, "values": [["e3", "Bea", "bea@firm.es", "2024-02-05T00:00:00Z", "B-1", "t2", "", ""]] },
            { "index": 3, "values": [["e4", "Ana", "ana@firm.es", "2024-01-31", "A-0", "t1", 2, ""]] },
            { "index": 4, "values": [["e5", "Ana", "ana@firm.es", "2024-03-01", "A-3", "t1", 2, ""]] }
        ]},
        "HistorialCambios": { "value": [
            { "index": 0, "values": [["2024-02-01T09:00:00Z", "ana@firm.es", "add", "A-1"]] }
        ]},
        "Calendario": { "value": [
            { "index": 0, "values": [["2024-02-14", "", "Company day"]] },
            { "index": 1, "values": [["28/2/2024", "Barcelona", "Local holiday"]] }
        ]}
    })
}

/// Write `sample_dump()` to a temp file and return its path.
pub fn write_sample_dump(name: &str) -> String {
    let path = temp_out(name, "json");
    fs::write(&path, serde_json::to_string_pretty(&sample_dump()).expect("serialize dump"))
        .expect("write dump");
    path
}

/// Fresh database seeded with `sample_dump()`.
pub fn seeded_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    let dump = write_sample_dump(name);

    esc_as(&db_path, SUP).args(["init"]).assert().success();
    esc_as(&db_path, SUP)
        .args(["import", "--file", &dump])
        .assert()
        .success();

    db_path
}
