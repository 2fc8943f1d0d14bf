use super::{MatchSource, SourceError};
use crate::errors::AutocompleteError;
use crate::services::validation::Validation;
use crate::utils::text::first_char;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Mutex;

/// Reads candidates from one text column of a SQLite table.
///
/// The rough query keys on the pattern's first character only: any value
/// starting with it, or having a later word starting with it.
pub struct SqliteSource {
    conn: Mutex<Connection>,
    query: String,
}

fn escape_like(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

impl SqliteSource {
    pub fn open(path: &Path, table: &str, column: &str) -> Result<Self, AutocompleteError> {
        let conn = Connection::open(path).map_err(SourceError::from)?;
        Self::from_connection(conn, table, column)
    }

    pub fn from_connection(
        conn: Connection,
        table: &str,
        column: &str,
    ) -> Result<Self, AutocompleteError> {
        let validation = Validation::new();
        let table = validation.ensure_sql_identifier(table, "Table name")?;
        let column = validation.ensure_sql_identifier(column, "Column name")?;
        let query = format!(
            "SELECT DISTINCT \"{col}\" FROM \"{table}\" \
             WHERE \"{col}\" LIKE ?1 ESCAPE '\\' OR \"{col}\" LIKE ?2 ESCAPE '\\' \
             ORDER BY \"{col}\" ASC",
            col = column,
            table = table
        );
        Ok(Self {
            conn: Mutex::new(conn),
            query,
        })
    }
}

impl MatchSource for SqliteSource {
    fn fetch(&self, pattern: &str) -> Result<Vec<String>, SourceError> {
        let Some(letter) = first_char(pattern.trim_start()) else {
            return Ok(Vec::new());
        };
        let letter = escape_like(letter);
        let conn = self
            .conn
            .lock()
            .map_err(|_| SourceError::Unavailable("sqlite connection lock poisoned".to_string()))?;
        let mut stmt = conn.prepare_cached(&self.query)?;
        let rows = stmt.query_map(
            params![format!("{}%", letter), format!("% {}%", letter)],
            |row| row.get::<_, Option<String>>(0),
        )?;
        let mut out = Vec::new();
        for row in rows {
            if let Some(value) = row? {
                out.push(value);
            }
        }
        Ok(out)
    }
}
