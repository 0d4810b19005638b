use crate::ui::messages::success;
use crate::utils::date::today_iso;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the change history table exists. It also records which
/// migrations have been applied (`accion = 'migration_applied'`).
fn ensure_historial_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS historial (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            fecha    TEXT NOT NULL,
            usuario  TEXT NOT NULL DEFAULT '',
            accion   TEXT NOT NULL,
            detalle  TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Create the business tables. Column order mirrors the workbook tables.
fn create_base_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS usuarios (
            id          TEXT PRIMARY KEY,
            nombre      TEXT NOT NULL DEFAULT '',
            email       TEXT NOT NULL UNIQUE,
            rol         TEXT NOT NULL DEFAULT 'member',
            sede        TEXT NOT NULL DEFAULT '',
            vacaciones  TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS tipos (
            id          TEXT PRIMARY KEY,
            nombre      TEXT NOT NULL DEFAULT '',
            puntuacion  REAL NOT NULL DEFAULT 0,
            activo      INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS configuracion (
            id              INTEGER PRIMARY KEY CHECK (id = 1),
            puntos_por_dia  REAL NOT NULL,
            bono_mensual    REAL NOT NULL,
            fecha_vigencia  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS entradas (
            id          TEXT PRIMARY KEY,
            usuario     TEXT NOT NULL DEFAULT '',
            email       TEXT NOT NULL,
            fecha       TEXT NOT NULL,
            expediente  TEXT NOT NULL,
            tipo_id     TEXT NOT NULL DEFAULT '',
            puntos      REAL NOT NULL DEFAULT 0,
            comentario  TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS calendario (
            fecha        TEXT NOT NULL,
            sede         TEXT NOT NULL DEFAULT '',
            descripcion  TEXT NOT NULL DEFAULT '',
            PRIMARY KEY (fecha, sede)
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM historial
         WHERE accion = 'migration_applied' AND detalle = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO historial (fecha, usuario, accion, detalle)
         VALUES (datetime('now'), 'system', 'migration_applied', ?1)",
        [version],
    )?;
    Ok(())
}

fn migrate_entries_indexes(conn: &Connection) -> Result<()> {
    let version = "20250310_0001_entries_indexes";
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_entradas_email_fecha ON entradas(email, fecha);
        CREATE INDEX IF NOT EXISTS idx_entradas_tipo ON entradas(tipo_id);
        "#,
    )?;

    mark_applied(conn, version)?;
    success(format!("Migration applied: {version} → indexes on entradas"));
    Ok(())
}

fn migrate_seed_configuration(conn: &Connection) -> Result<()> {
    let version = "20250310_0002_seed_configuracion";
    if is_applied(conn, version)? {
        return Ok(());
    }

    let existing: Option<i64> = conn
        .query_row("SELECT id FROM configuracion WHERE id = 1", [], |row| {
            row.get(0)
        })
        .optional()?;

    if existing.is_none() {
        conn.execute(
            "INSERT INTO configuracion (id, puntos_por_dia, bono_mensual, fecha_vigencia)
             VALUES (1, ?1, ?2, ?3)",
            params![
                crate::models::incentive::DEFAULT_DAILY_POINT_TARGET,
                crate::models::incentive::DEFAULT_MONTHLY_BONUS,
                today_iso()
            ],
        )?;
    }

    mark_applied(conn, version)?;
    success(format!(
        "Migration applied: {version} → default incentive configuration"
    ));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_historial_table(conn)?;
    create_base_tables(conn)?;

    migrate_entries_indexes(conn)?;
    migrate_seed_configuration(conn)?;

    Ok(())
}
