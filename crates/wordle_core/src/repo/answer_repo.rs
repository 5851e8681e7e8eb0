//! Daily answer store contract and SQLite implementation.
//!
//! # Responsibility
//! - Look up, upsert, list and bulk-seed `daily_answers` rows.
//!
//! # Invariants
//! - One row per date; upserts are a single atomic statement, last writer
//!   wins.
//! - Seeding never overwrites an existing row.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::daily_answer::DailyAnswer;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from answer store operations.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Persisted row cannot be converted to a valid record.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "answer repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "answer repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "answer repository requires column `{column}` in table `{table}`"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted answer data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Answer store used by the resolution and upsert use-cases.
pub trait AnswerRepository {
    /// Returns the stored answer for `date`, if any.
    fn find_answer(&self, date: NaiveDate) -> RepoResult<Option<DailyAnswer>>;
    /// Inserts or overwrites the answer for `record.date`.
    fn upsert_answer(&self, record: &DailyAnswer) -> RepoResult<DailyAnswer>;
    /// Returns all stored answers ordered by date ascending.
    fn list_answers(&self) -> RepoResult<Vec<DailyAnswer>>;
    fn count_answers(&self) -> RepoResult<u64>;
    /// Inserts records whose date is not yet stored, in one transaction.
    /// Returns the number of rows inserted.
    fn insert_missing(&self, records: &[DailyAnswer]) -> RepoResult<usize>;
}

/// SQLite-backed answer store.
pub struct SqliteAnswerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAnswerRepository<'conn> {
    /// Wraps a migrated connection after verifying its schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_answer_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl AnswerRepository for SqliteAnswerRepository<'_> {
    fn find_answer(&self, date: NaiveDate) -> RepoResult<Option<DailyAnswer>> {
        let record = self
            .conn
            .query_row(
                "SELECT date, answer FROM daily_answers WHERE date = ?1;",
                [date_to_db(date)],
                raw_row,
            )
            .optional()?;

        record.map(parse_answer_row).transpose()
    }

    fn upsert_answer(&self, record: &DailyAnswer) -> RepoResult<DailyAnswer> {
        let stored = self.conn.query_row(
            "INSERT INTO daily_answers (date, answer)
             VALUES (?1, ?2)
             ON CONFLICT(date) DO UPDATE SET
                answer = excluded.answer,
                updated_at = (strftime('%s', 'now') * 1000)
             RETURNING date, answer;",
            params![date_to_db(record.date), record.answer.as_str()],
            raw_row,
        )?;

        parse_answer_row(stored)
    }

    fn list_answers(&self) -> RepoResult<Vec<DailyAnswer>> {
        let mut stmt = self
            .conn
            .prepare("SELECT date, answer FROM daily_answers ORDER BY date ASC;")?;
        let mut rows = stmt.query([])?;
        let mut answers = Vec::new();

        while let Some(row) = rows.next()? {
            answers.push(parse_answer_row(raw_row(row)?)?);
        }

        Ok(answers)
    }

    fn count_answers(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM daily_answers;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count {count}")))
    }

    fn insert_missing(&self, records: &[DailyAnswer]) -> RepoResult<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO daily_answers (date, answer)
                 VALUES (?1, ?2)
                 ON CONFLICT(date) DO NOTHING;",
            )?;
            for record in records {
                inserted += stmt.execute(params![date_to_db(record.date), record.answer.as_str()])?;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }
}

type RawAnswerRow = (String, String);

fn raw_row(row: &Row<'_>) -> rusqlite::Result<RawAnswerRow> {
    Ok((row.get("date")?, row.get("answer")?))
}

fn parse_answer_row((date_text, answer): RawAnswerRow) -> RepoResult<DailyAnswer> {
    let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!("invalid date `{date_text}` in daily_answers.date"))
    })?;

    if answer.is_empty() || !answer.chars().all(|ch| ch.is_ascii_lowercase()) {
        return Err(RepoError::InvalidData(format!(
            "answer for {date_text} in daily_answers.answer is not lowercase letters"
        )));
    }

    Ok(DailyAnswer { date, answer })
}

fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn ensure_answer_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "daily_answers")? {
        return Err(RepoError::MissingRequiredTable("daily_answers"));
    }

    for column in ["date", "answer", "created_at", "updated_at"] {
        if !table_has_column(conn, "daily_answers", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "daily_answers",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
