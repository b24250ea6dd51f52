//! Generic SQLite implementation of [`Repository`].
//!
//! # Responsibility
//! - Derive CRUD statements from a record's [`Record`] table mapping.
//! - Keep every operation a single statement against the borrowed connection.

use crate::repo::record::Record;
use crate::repo::{RepoError, RepoResult, Repository};
use log::debug;
use rusqlite::{params_from_iter, Connection};
use std::marker::PhantomData;

/// SQLite-backed repository for one record type.
pub struct SqliteRepository<'conn, T> {
    conn: &'conn Connection,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for SqliteRepository<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SqliteRepository<'_, T> {}

impl<'conn, T: Record> SqliteRepository<'conn, T> {
    /// Binds a repository to a migrated connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }

    pub(crate) fn conn(&self) -> &'conn Connection {
        self.conn
    }

    fn select_sql() -> String {
        let columns = T::KEY_COLUMNS
            .iter()
            .chain(T::COLUMNS.iter())
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        format!("SELECT {columns} FROM {}", T::TABLE)
    }

    fn key_predicate(first_placeholder: usize) -> String {
        T::KEY_COLUMNS
            .iter()
            .enumerate()
            .map(|(index, column)| format!("{column} = ?{}", first_placeholder + index))
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

impl<T: Record> Repository<T> for SqliteRepository<'_, T> {
    fn get_all(&self) -> RepoResult<Vec<T>> {
        let sql = format!(
            "{} ORDER BY {};",
            Self::select_sql(),
            T::KEY_COLUMNS.join(", ")
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(T::from_row(row)?);
        }

        Ok(records)
    }

    fn get_by_id(&self, id: &T::Key) -> RepoResult<Option<T>> {
        let sql = format!("{} WHERE {};", Self::select_sql(), Self::key_predicate(1));
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(T::key_values(id)))?;

        if let Some(row) = rows.next()? {
            return Ok(Some(T::from_row(row)?));
        }

        Ok(None)
    }

    fn create(&self, record: &T) -> RepoResult<T> {
        record.validate()?;
        record.check_insert(self.conn)?;

        let columns = T::KEY_COLUMNS
            .iter()
            .chain(T::COLUMNS.iter())
            .copied()
            .collect::<Vec<_>>();
        let placeholders = (1..=columns.len())
            .map(|index| format!("?{index}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders});",
            T::TABLE,
            columns.join(", ")
        );

        let key = record.key();
        let mut values = T::key_values(&key);
        values.extend(record.column_values());
        self.conn.execute(&sql, params_from_iter(values))?;
        debug!(
            "event=repo_write module=repo op=create table={} key={:?} status=ok",
            T::TABLE,
            key
        );

        self.get_by_id(&key)?.ok_or_else(|| {
            RepoError::InvalidData(format!(
                "{} row {key:?} vanished right after insert",
                T::TABLE
            ))
        })
    }

    fn update<F>(&self, id: &T::Key, apply: F) -> RepoResult<Option<T>>
    where
        F: FnOnce(&mut T),
    {
        let Some(mut record) = self.get_by_id(id)? else {
            debug!(
                "event=repo_write module=repo op=update table={} key={:?} status=missing",
                T::TABLE,
                id
            );
            return Ok(None);
        };

        apply(&mut record);
        record.validate()?;

        if !T::COLUMNS.is_empty() {
            let assignments = T::COLUMNS
                .iter()
                .enumerate()
                .map(|(index, column)| format!("{column} = ?{}", index + 1))
                .collect::<Vec<_>>()
                .join(", ");
            let sql = format!(
                "UPDATE {} SET {assignments} WHERE {};",
                T::TABLE,
                Self::key_predicate(T::COLUMNS.len() + 1)
            );

            let mut values = record.column_values();
            values.extend(T::key_values(id));
            self.conn.execute(&sql, params_from_iter(values))?;
        }
        debug!(
            "event=repo_write module=repo op=update table={} key={:?} status=ok",
            T::TABLE,
            id
        );

        self.get_by_id(id)
    }

    fn delete(&self, id: &T::Key) -> RepoResult<()> {
        let sql = format!(
            "DELETE FROM {} WHERE {};",
            T::TABLE,
            Self::key_predicate(1)
        );
        let changed = self.conn.execute(&sql, params_from_iter(T::key_values(id)))?;
        debug!(
            "event=repo_write module=repo op=delete table={} key={:?} changed={}",
            T::TABLE,
            id,
            changed
        );
        Ok(())
    }
}
