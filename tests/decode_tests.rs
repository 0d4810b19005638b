use escritos::models::role::Role;
use escritos::sheet::decode::parse_dump;
use escritos::sheet::decode_workbook;
use escritos::utils::date::today_iso;
use serde_json::json;

mod common;

#[test]
fn test_decode_sample_workbook() {
    let wb = decode_workbook(&common::sample_dump());

    assert_eq!(wb.users.len(), 3);
    let sup = &wb.users[0];
    assert_eq!(sup.email, "sup@firm.es");
    assert_eq!(sup.role, Role::Supervisor);
    assert_eq!(sup.site.as_deref(), Some("madrid"));
    // legacy role maps to member
    assert_eq!(wb.users[2].role, Role::Member);
    assert_eq!(wb.users[1].vacation_dates, ["2024-02-10"]);

    assert_eq!(wb.entry_types.len(), 3);
    assert_eq!(wb.entry_types[1].points, 3.0);
    assert!(wb.entry_types[1].active);
    assert!(!wb.entry_types[2].active);

    assert_eq!(wb.incentive.daily_point_target, 2.0);
    assert_eq!(wb.incentive.monthly_bonus, 300.0);
    assert_eq!(wb.incentive.effective_date, "2024-01-01");

    let e2 = &wb.entries[1];
    assert_eq!(e2.owner_email, "ana@firm.es");
    assert_eq!(e2.date, "2024-02-02");
    assert_eq!(e2.points, 3.0);
    assert_eq!(wb.entries[2].date, "2024-02-05");
    assert_eq!(wb.entries[2].points, 0.0);

    assert_eq!(wb.holidays[1].date, "2024-02-28");
    assert_eq!(wb.holidays[1].site, "barcelona");
    assert_eq!(wb.changes.len(), 1);

    assert_eq!(wb.users_index.get("u3"), Some(2));
    assert_eq!(wb.entries_index.len(), 5);
}

#[test]
fn test_decode_coerces_bad_cells() {
    let dump = json!({
        "Usuarios": { "value": [
            { "index": 0, "values": [["", "No id", "x@y.z", "supervisor", "", ""]] },
            { "index": 1, "values": [[17, "  Padded  ", " MiXeD@Firm.ES ", null]] }
        ]},
        "Entradas": { "value": [
            { "index": 0, "values": [["e1", "Ana", "a@b.c", 45336, "A", "t1", "1,5", null]] },
            { "index": 1, "values": [["e2", "Ana", "a@b.c", "garbage", "B", "t1", "abc", ""]] },
            { "index": 2, "values": [[null, "Ana", "a@b.c", "2024-02-01", "C", "t1", 1, ""]] }
        ]},
        "Calendario": { "value": [
            { "index": 0, "values": [["", "madrid", "no date"]] }
        ]},
        "TiposEscritos": "not a table"
    });

    let wb = decode_workbook(&dump);

    assert_eq!(wb.users.len(), 1);
    assert_eq!(wb.users[0].id, "17");
    assert_eq!(wb.users[0].name, "Padded");
    assert_eq!(wb.users[0].email, "mixed@firm.es");
    assert_eq!(wb.users[0].role, Role::Member);
    assert_eq!(wb.users[0].site, None);

    assert_eq!(wb.entries.len(), 2);
    // Excel serial 45336 is 2024-02-14
    assert_eq!(wb.entries[0].date, "2024-02-14");
    assert_eq!(wb.entries[0].points, 1.5);
    assert_eq!(wb.entries[1].date, "garbage");
    assert_eq!(wb.entries[1].points, 0.0);

    assert!(wb.holidays.is_empty());
    assert!(wb.entry_types.is_empty());
}

#[test]
fn test_configuration_fallbacks() {
    let dump = json!({
        "Configuracion": { "value": [
            { "index": 0, "values": [[0, "", ""]] }
        ]}
    });
    let wb = decode_workbook(&dump);
    assert_eq!(wb.incentive.daily_point_target, 2.0);
    assert_eq!(wb.incentive.monthly_bonus, 300.0);
    assert_eq!(wb.incentive.effective_date, today_iso());

    let empty = decode_workbook(&json!({}));
    assert!(empty.users.is_empty());
    assert_eq!(empty.incentive.monthly_bonus, 300.0);
}

#[test]
fn test_out_of_range_serial_dates_decode_to_empty() {
    let text = r#"{"Entradas":{"value":[
        {"index":0,"values":[["1","a","a@x.es",1e20,"c","t",2,""]]},
        {"index":1,"values":[["2","a","a@x.es",-1e20,"d","t",2,""]]},
        {"index":2,"values":[["3","a","a@x.es",-5,"e","t",2,""]]}
    ]}}"#;

    let wb = parse_dump(text).unwrap();
    assert_eq!(wb.entries.len(), 3);
    assert!(wb.entries.iter().all(|e| e.date.is_empty()));

    let holidays = decode_workbook(&json!({
        "Calendario": { "value": [{ "index": 0, "values": [[1e20, "", "far away"]] }] }
    }));
    assert!(holidays.holidays.is_empty());
}

#[test]
fn test_zero_bonus_is_kept_on_import() {
    let wb = decode_workbook(&json!({
        "Configuracion": { "value": [{ "index": 0, "values": [[3, 0, "2024-01-01"]] }] }
    }));
    assert_eq!(wb.incentive.daily_point_target, 3.0);
    assert_eq!(wb.incentive.monthly_bonus, 0.0);

    let wb = decode_workbook(&json!({
        "Configuracion": { "value": [{ "index": 0, "values": [[3, "n/a", "2024-01-01"]] }] }
    }));
    assert_eq!(wb.incentive.monthly_bonus, 300.0);
}

#[test]
fn test_invalid_json_is_an_error() {
    assert!(parse_dump("{ not json").is_err());
    assert!(parse_dump("{}").is_ok());
}
