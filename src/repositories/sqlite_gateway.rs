// src/repositories/sqlite_gateway.rs
//
// Relational gateway over the r2d2 SQLite pool.
//
// - Every write runs in its own transaction; dropping it uncommitted rolls back
// - Key assignment is left to SQLite (INTEGER PRIMARY KEY => max + 1)
// - Uniqueness, cascade and restrict rules come from the schema
// - Driver errors are converted to AppError before leaving this file

use std::marker::PhantomData;
use std::sync::Arc;

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use super::record::{Patch, Record};
use super::Gateway;
use crate::db::ConnectionPool;
use crate::error::{AppError, AppResult};

pub struct SqliteGateway<R> {
    pool: Arc<ConnectionPool>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> SqliteGateway<R> {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    fn select_sql() -> String {
        format!("SELECT id, {} FROM {}", R::COLUMNS.join(", "), R::TABLE)
    }

    fn insert_sql() -> String {
        let placeholders: Vec<String> = (1..=R::COLUMNS.len()).map(|i| format!("?{}", i)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            R::TABLE,
            R::COLUMNS.join(", "),
            placeholders.join(", ")
        )
    }

    fn exists(conn: &Connection, id: i64) -> AppResult<bool> {
        let found: Option<i64> = conn
            .query_row(
                &format!("SELECT id FROM {} WHERE id = ?1", R::TABLE),
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Check out a connection, run `op`, and log any failure once
    fn run<T>(&self, op: &str, f: impl FnOnce(&mut Connection) -> AppResult<T>) -> AppResult<T> {
        let result = self
            .pool
            .get()
            .map_err(AppError::from)
            .and_then(|mut conn| f(&mut *conn));

        if let Err(err) = &result {
            log_failure(R::TABLE, op, err);
        }
        result
    }
}

impl<R: Record> Gateway<R> for SqliteGateway<R> {
    fn get_all(&self) -> AppResult<Vec<R>> {
        self.run("get_all", |conn| {
            let mut stmt = conn.prepare(&format!("{} ORDER BY id", Self::select_sql()))?;
            let records = stmt
                .query_map([], R::from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(records)
        })
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<R>> {
        if id <= 0 {
            return Ok(None);
        }

        self.run("get_by_id", |conn| {
            let record = conn
                .query_row(
                    &format!("{} WHERE id = ?1", Self::select_sql()),
                    params![id],
                    R::from_row,
                )
                .optional()?;
            Ok(record)
        })
    }

    fn add(&self, record: &R) -> AppResult<i64> {
        self.run("add", |conn| {
            let tx = conn.transaction()?;
            tx.execute(&Self::insert_sql(), params_from_iter(record.to_values()))?;
            let id = tx.last_insert_rowid();
            tx.commit()?;

            log::debug!("{}: added row {}", R::TABLE, id);
            Ok(id)
        })
    }

    fn update(&self, patch: &R::Patch) -> AppResult<()> {
        let id = patch.id();

        self.run("update", |conn| {
            let tx = conn.transaction()?;
            if !Self::exists(&tx, id)? {
                return Err(AppError::NotFound);
            }

            let assignments = patch.assignments();
            if !assignments.is_empty() {
                let set_clause: Vec<String> = assignments
                    .iter()
                    .enumerate()
                    .map(|(i, (column, _))| format!("{} = ?{}", column, i + 1))
                    .collect();
                let mut values: Vec<Value> = assignments.into_iter().map(|(_, v)| v).collect();
                values.push(Value::Integer(id));

                tx.execute(
                    &format!(
                        "UPDATE {} SET {} WHERE id = ?{}",
                        R::TABLE,
                        set_clause.join(", "),
                        values.len()
                    ),
                    params_from_iter(values),
                )?;
            }

            tx.commit()?;
            Ok(())
        })
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        self.run("delete", |conn| {
            let tx = conn.transaction()?;
            if !Self::exists(&tx, id)? {
                return Err(AppError::NotFound);
            }

            tx.execute(&format!("DELETE FROM {} WHERE id = ?1", R::TABLE), params![id])?;
            tx.commit()?;

            log::debug!("{}: deleted row {}", R::TABLE, id);
            Ok(())
        })
    }
}

pub(super) fn log_failure(table: &str, op: &str, err: &AppError) {
    match err {
        AppError::NotFound => log::debug!("{}.{}: not found", table, op),
        // The driver text was already logged when the conflict was classified
        AppError::Conflict(reason) => log::debug!("{}.{} rejected: {}", table, op, reason),
        other => log::error!("{}.{} failed: {}", table, op, other),
    }
}
