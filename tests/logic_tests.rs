use escritos::core::entries::{EntryEdit, EntryLogic};
use escritos::core::entry_types::{EntryTypeEdit, EntryTypeLogic};
use escritos::core::identity::resolve_actor;
use escritos::core::import::ImportLogic;
use escritos::core::users::{UserEdit, UserLogic};
use escritos::db::entry_types::insert_entry_type;
use escritos::db::initialize::init_db;
use escritos::db::log::load_changes;
use escritos::db::pool::DbPool;
use escritos::db::users::insert_user;
use escritos::errors::AppError;
use escritos::models::context::DataContext;
use escritos::models::entry_type::EntryType;
use escritos::models::role::Role;
use escritos::models::user::User;
use escritos::sheet::decode_workbook;

mod common;

fn setup() -> (DbPool, User, User) {
    let pool = DbPool::in_memory().expect("in-memory db");
    init_db(&pool.conn).expect("init db");

    let sup = User::new("u1", "Sup", "sup@firm.es", Role::Supervisor);
    let ana = User::new("u2", "Ana", "ana@firm.es", Role::Member);
    insert_user(&pool.conn, &sup).unwrap();
    insert_user(&pool.conn, &ana).unwrap();

    for (id, name, points, active) in [("t1", "Demanda", 2.0, true), ("t2", "Recurso", 3.0, true)] {
        insert_entry_type(
            &pool.conn,
            &EntryType { id: id.into(), name: name.into(), points, active },
        )
        .unwrap();
    }

    (pool, sup, ana)
}

#[test]
fn test_register_snapshots_points_and_audits() {
    let (mut pool, _sup, ana) = setup();

    let e = EntryLogic::register(&mut pool, &ana, "2024-02-05", " X-1 ", "t2", Some("note")).unwrap();
    assert_eq!(e.points, 3.0);
    assert_eq!(e.case_reference, "X-1");
    assert_eq!(e.owner_email, "ana@firm.es");

    let changes = load_changes(&pool.conn).unwrap();
    let last = changes.last().unwrap();
    assert_eq!(last.action, "add");
    assert_eq!(last.user, "ana@firm.es");
    assert!(last.detail.contains("X-1"));
}

#[test]
fn test_duplicate_case_and_empty_case() {
    let (mut pool, _sup, ana) = setup();

    EntryLogic::register(&mut pool, &ana, "2024-02-05", "X-1", "t1", None).unwrap();
    let err = EntryLogic::register(&mut pool, &ana, "2024-02-28", "X-1", "t2", None).unwrap_err();
    assert!(matches!(err, AppError::DuplicateCase { ref month, .. } if month == "2024-02"));

    let err = EntryLogic::register(&mut pool, &ana, "2024-02-05", "   ", "t1", None).unwrap_err();
    assert!(matches!(err, AppError::MissingField(_)));
}

#[test]
fn test_type_edit_keeps_snapshot_until_entry_is_retyped() {
    let (mut pool, sup, ana) = setup();

    let e = EntryLogic::register(&mut pool, &ana, "2024-02-05", "X-1", "t1", None).unwrap();

    let edit = EntryTypeEdit { points: Some(10.0), ..Default::default() };
    EntryTypeLogic::edit(&mut pool, &sup, "t1", &edit).unwrap();

    // editing the comment keeps the 2 pts snapshot
    let changes = EntryEdit { comment: Some("later".into()), ..Default::default() };
    let same = EntryLogic::edit(&mut pool, &ana, &e.id, &changes).unwrap();
    assert_eq!(same.points, 2.0);

    let retype = EntryEdit { entry_type_id: Some("t2".into()), ..Default::default() };
    let retyped = EntryLogic::edit(&mut pool, &ana, &e.id, &retype).unwrap();
    assert_eq!(retyped.points, 3.0);
    assert_eq!(retyped.comment, "later");
}

#[test]
fn test_entry_type_in_use_cannot_be_deleted() {
    let (mut pool, sup, ana) = setup();
    EntryLogic::register(&mut pool, &ana, "2024-02-05", "X-1", "t1", None).unwrap();

    let err = EntryTypeLogic::delete(&mut pool, &sup, "t1").unwrap_err();
    assert!(matches!(err, AppError::EntryTypeInUse(_)));

    let err = EntryTypeLogic::delete(&mut pool, &ana, "t2").unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));

    EntryTypeLogic::delete(&mut pool, &sup, "t2").unwrap();
    let ctx = DataContext::load(&mut pool).unwrap();
    assert_eq!(ctx.entry_types.len(), 1);
}

#[test]
fn test_inactive_type_is_refused_for_new_entries() {
    let (mut pool, sup, ana) = setup();
    let off = EntryTypeEdit { active: Some(false), ..Default::default() };
    EntryTypeLogic::edit(&mut pool, &sup, "t1", &off).unwrap();

    let err = EntryLogic::register(&mut pool, &ana, "2024-02-05", "X-1", "t1", None).unwrap_err();
    assert!(matches!(err, AppError::InactiveEntryType(_)));
}

#[test]
fn test_user_management() {
    let (mut pool, sup, ana) = setup();

    let err = UserLogic::add(&mut pool, &ana, "x@firm.es", "X", None, None, None).unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));

    let bea = UserLogic::add(
        &mut pool,
        &sup,
        "BEA@firm.es",
        "Bea",
        Some("member"),
        Some("Barcelona"),
        Some("2024-02-05,2024-02-06"),
    )
    .unwrap();
    assert_eq!(bea.email, "bea@firm.es");
    assert_eq!(bea.site.as_deref(), Some("barcelona"));
    assert_eq!(bea.vacation_dates.len(), 2);

    let err = UserLogic::add(&mut pool, &sup, "bea@firm.es", "Again", None, None, None).unwrap_err();
    assert!(matches!(err, AppError::Other(_)));

    let promote = UserEdit { role: Some("supervisor".into()), vacations: Some("".into()), ..Default::default() };
    let bea = UserLogic::edit(&mut pool, &sup, &bea.id, &promote).unwrap();
    assert!(bea.is_supervisor());
    assert!(bea.vacation_dates.is_empty());

    let bad = UserEdit { role: Some("boss".into()), ..Default::default() };
    assert!(matches!(
        UserLogic::edit(&mut pool, &sup, &bea.id, &bad).unwrap_err(),
        AppError::InvalidRole(_)
    ));

    let bad = UserEdit { vacations: Some("05/02/2024".into()), ..Default::default() };
    assert!(matches!(
        UserLogic::edit(&mut pool, &sup, &bea.id, &bad).unwrap_err(),
        AppError::InvalidDate(_)
    ));
}

#[test]
fn test_resolve_actor_enrolls_unknown_email() {
    let (mut pool, _sup, _ana) = setup();

    let u = resolve_actor(&mut pool, " New.Person@Firm.es ").unwrap();
    assert_eq!(u.email, "new.person@firm.es");
    assert_eq!(u.name, "new.person");
    assert_eq!(u.role, Role::Member);

    // second call finds the same row
    let again = resolve_actor(&mut pool, "new.person@firm.es").unwrap();
    assert_eq!(again.id, u.id);

    assert!(matches!(resolve_actor(&mut pool, "  ").unwrap_err(), AppError::Config(_)));
}

#[test]
fn test_import_replaces_tables_and_keeps_migrations() {
    let (mut pool, _sup, ana) = setup();
    EntryLogic::register(&mut pool, &ana, "2024-02-05", "LOCAL", "t1", None).unwrap();

    let wb = decode_workbook(&common::sample_dump());
    let summary = ImportLogic::apply(&mut pool, "sup@firm.es", wb).unwrap();
    assert_eq!(summary.users, 3);
    assert_eq!(summary.entries, 5);
    assert_eq!(summary.skipped, 0);

    let ctx = DataContext::load(&mut pool).unwrap();
    assert_eq!(ctx.users.len(), 3);
    assert!(ctx.entries.iter().all(|e| e.case_reference != "LOCAL"));
    assert_eq!(ctx.holidays.len(), 2);

    let changes = load_changes(&pool.conn).unwrap();
    assert!(changes.iter().any(|c| c.action == "migration_applied"));
    assert_eq!(changes.last().unwrap().action, "import");

    // migrations are not re-applied
    let before = changes.len();
    init_db(&pool.conn).unwrap();
    assert_eq!(load_changes(&pool.conn).unwrap().len(), before);
}
