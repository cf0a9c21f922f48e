//! The three fixed query shapes the dashboard runs.
//!
//! The year is always the single bound parameter. Column names are only
//! ever interpolated from the taxonomy enums in
//! `crash_map_crash_models`, so no caller-supplied text can reach SQL.
//! All rows are materialized eagerly in statement order; no ORDER BY is
//! imposed.

use crash_map_crash_models::GroupField;
use crash_map_database_models::{CounterRow, CrashRecord, FieldCount, FieldValue};
use rusqlite::Connection;
use rusqlite::types::ValueRef;

use crate::DbError;

/// Counts crashes per distinct value of a group field within a year.
///
/// Runs `SELECT <col>, COUNT(*) ... GROUP BY <col>` with `<col>` taken
/// from the [`GroupField`] allow-list.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails.
pub fn count_by_field(
    conn: &Connection,
    field: GroupField,
    year: &str,
) -> Result<Vec<FieldCount>, DbError> {
    let sql = format!(
        "SELECT {col}, COUNT(*)
         FROM ACCIDENT
         WHERE strftime('%Y', ACCIDENT_DATE) = ?1
         GROUP BY {col}",
        col = field.column()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([year], |row| {
        let value = match row.get_ref(0)? {
            ValueRef::Integer(i) => FieldValue::Integer(i),
            ValueRef::Real(f) => FieldValue::Text(f.to_string()),
            ValueRef::Text(t) => FieldValue::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(_) | ValueRef::Null => FieldValue::Null,
        };
        #[allow(clippy::cast_sign_loss)]
        let count = row.get::<_, i64>(1)? as u64;
        Ok(FieldCount { value, count })
    })?;

    rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
}

/// Returns the five person counters of every crash in a year.
///
/// No aggregation happens here; summing is the analytics crate's job.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails.
pub fn counter_rows(conn: &Connection, year: &str) -> Result<Vec<CounterRow>, DbError> {
    let mut stmt = conn.prepare(
        "SELECT NO_PERSONS, NO_PERSONS_INJ_2, NO_PERSONS_INJ_3,
                NO_PERSONS_KILLED, NO_PERSONS_NOT_INJ
         FROM ACCIDENT
         WHERE strftime('%Y', ACCIDENT_DATE) = ?1",
    )?;

    let rows = stmt.query_map([year], |row| {
        Ok(CounterRow {
            persons: row.get(0)?,
            serious_injuries: row.get(1)?,
            other_injuries: row.get(2)?,
            killed: row.get(3)?,
            not_injured: row.get(4)?,
        })
    })?;

    rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
}

/// Returns location, date, time, and type of every crash in a year.
///
/// Joins `ACCIDENT` to `NODE` on the accident number. Coordinates stay
/// optional here; filtering out coordinate-less records is the map
/// renderer's contract, not SQL's.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails.
pub fn crash_locations(conn: &Connection, year: &str) -> Result<Vec<CrashRecord>, DbError> {
    let mut stmt = conn.prepare(
        "SELECT n.LATITUDE, n.LONGITUDE, a.ACCIDENT_DATE, a.ACCIDENT_TIME,
                a.ACCIDENT_TYPE_DESC
         FROM ACCIDENT a
         JOIN NODE n ON a.ACCIDENT_NO = n.ACCIDENT_NO
         WHERE strftime('%Y', a.ACCIDENT_DATE) = ?1",
    )?;

    let rows = stmt.query_map([year], |row| {
        Ok(CrashRecord {
            latitude: row.get(0)?,
            longitude: row.get(1)?,
            accident_date: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            accident_time: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            accident_type: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        })
    })?;

    rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
}
