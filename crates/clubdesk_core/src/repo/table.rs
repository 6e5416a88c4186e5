//! Generic table mapping and SQLite repository.
//!
//! # Responsibility
//! - Describe how one entity kind maps to one table (`TableRecord`).
//! - Provide single-statement CRUD over any described table.
//! - Translate every `rusqlite` failure into `ErrorKind::Storage`.
//!
//! # Invariants
//! - `COLUMNS` lists every column in field-declaration order, and
//!   `to_values()` yields exactly one value per column in that order.
//! - Every call prepares, executes and drops its own statement; nothing is
//!   cached across calls.
//! - This layer never validates; services gate writes.

use crate::error::{CoreResult, ResultExt};
use crate::model::{Entity, EntityId};
use crate::validation::format_date;
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Params, Row};
use std::marker::PhantomData;

/// Column-mapping descriptor for one entity kind.
pub trait TableRecord: Entity {
    const TABLE: &'static str;
    const ID_COLUMN: &'static str;
    const COLUMNS: &'static [&'static str];

    /// Bind values aligned with `COLUMNS`.
    fn to_values(&self) -> Vec<Value>;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// SQLite repository for any `TableRecord`.
pub struct SqliteTableRepository<'conn, T> {
    conn: &'conn Connection,
    _record: PhantomData<fn() -> T>,
}

impl<'conn, T: TableRecord> SqliteTableRepository<'conn, T> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }

    /// Loads one row by identifier; `None` when no row matches.
    pub fn get(&self, id: EntityId) -> CoreResult<Option<T>> {
        let sql = format!("{} WHERE {} = ?1;", select_sql::<T>(), T::ID_COLUMN);
        self.query_first(&sql, [id])
            .storage_context(|| format!("error finding {} by id {id}", T::KIND))
    }

    /// Loads every row in the store's natural order.
    pub fn list(&self) -> CoreResult<Vec<T>> {
        self.query_all(&format!("{};", select_sql::<T>()), [])
            .storage_context(|| format!("error fetching all {}s", T::KIND))
    }

    /// Loads rows matching a trailing `WHERE`/`ORDER BY` clause.
    pub(crate) fn list_filtered<P: Params>(
        &self,
        filter_sql: &str,
        params: P,
        context: impl FnOnce() -> String,
    ) -> CoreResult<Vec<T>> {
        let sql = format!("{} {filter_sql};", select_sql::<T>());
        self.query_all(&sql, params).storage_context(context)
    }

    /// Inserts one row; returns the affected row count.
    pub fn insert(&self, record: &T) -> CoreResult<usize> {
        let placeholders = (1..=T::COLUMNS.len())
            .map(|index| format!("?{index}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders});",
            T::TABLE,
            T::COLUMNS.join(", ")
        );

        self.conn
            .execute(&sql, params_from_iter(record.to_values()))
            .storage_context(|| format!("error saving {}", T::KIND))
    }

    /// Rewrites every non-identifier column; returns the affected row count.
    pub fn update(&self, record: &T) -> CoreResult<usize> {
        let mut assignments = Vec::with_capacity(T::COLUMNS.len());
        let mut bind_values = Vec::with_capacity(T::COLUMNS.len());
        for (column, value) in T::COLUMNS.iter().zip(record.to_values()) {
            if *column == T::ID_COLUMN {
                continue;
            }
            bind_values.push(value);
            assignments.push(format!("{column} = ?{}", bind_values.len()));
        }
        bind_values.push(Value::Integer(record.id()));
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?{};",
            T::TABLE,
            assignments.join(", "),
            T::ID_COLUMN,
            bind_values.len()
        );

        self.conn
            .execute(&sql, params_from_iter(bind_values))
            .storage_context(|| format!("error updating {} {}", T::KIND, record.id()))
    }

    /// Deletes by identifier; returns the affected row count.
    pub fn delete(&self, id: EntityId) -> CoreResult<usize> {
        let sql = format!("DELETE FROM {} WHERE {} = ?1;", T::TABLE, T::ID_COLUMN);
        self.conn
            .execute(&sql, [id])
            .storage_context(|| format!("error deleting {} {id}", T::KIND))
    }

    pub fn count(&self) -> CoreResult<u64> {
        self.count_filtered("", [])
    }

    pub(crate) fn count_filtered<P: Params>(&self, filter_sql: &str, params: P) -> CoreResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM {} {filter_sql};", T::TABLE);
        let count = self
            .conn
            .query_row(&sql, params, |row| row.get::<_, i64>(0))
            .storage_context(|| format!("error counting {}s", T::KIND))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    fn query_first<P: Params>(&self, sql: &str, params: P) -> rusqlite::Result<Option<T>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        match rows.next()? {
            Some(row) => Ok(Some(T::from_row(row)?)),
            None => Ok(None),
        }
    }

    fn query_all<P: Params>(&self, sql: &str, params: P) -> rusqlite::Result<Vec<T>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(T::from_row(row)?);
        }
        Ok(records)
    }
}

fn select_sql<T: TableRecord>() -> String {
    format!("SELECT {} FROM {}", T::COLUMNS.join(", "), T::TABLE)
}

pub(crate) fn text_value(value: &str) -> Value {
    Value::Text(value.to_string())
}

pub(crate) fn optional_text_value(value: Option<&str>) -> Value {
    value.map_or(Value::Null, text_value)
}

pub(crate) fn date_value(value: NaiveDate) -> Value {
    Value::Text(format_date(value))
}
