//! SQLite record store for projects and tasks.
//!
//! Low-level, synchronous database operations. The async
//! [`Tracker`](crate::Tracker) opens a [`Database`] per operation inside a
//! blocking task.

use std::{path::Path, str::FromStr};

use jiff::{civil::Date, Timestamp};
use rusqlite::{types::Type, Connection, Row};

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod project_queries;
pub mod task_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Read a text column holding an RFC 3339 timestamp.
fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Read a nullable text column holding a `YYYY-MM-DD` date.
fn date_column(row: &Row, idx: usize) -> rusqlite::Result<Option<Date>> {
    row.get::<_, Option<String>>(idx)?
        .map(|text| {
            text.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })
        })
        .transpose()
}

/// Read a text column holding one of the model enums.
fn enum_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    let text: String = row.get(idx)?;
    text.parse::<T>()
        .map_err(|reason| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, reason.into()))
}

fn date_text(date: Option<Date>) -> Option<String> {
    date.map(|d| d.to_string())
}

/// Merge an optional text update; empty text clears the field.
fn merge_text(update: Option<&String>, current: Option<String>) -> Option<String> {
    match update {
        Some(text) if text.trim().is_empty() => None,
        Some(text) => Some(text.clone()),
        None => current,
    }
}
