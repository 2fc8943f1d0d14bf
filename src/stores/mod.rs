mod memory_source;
mod sqlite_source;

pub use memory_source::MemorySource;
pub use sqlite_source::SqliteSource;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("sqlite query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("failed to read candidates: {0}")]
    Io(#[from] std::io::Error),
    #[error("match source unavailable: {0}")]
    Unavailable(String),
}

/// Produces the rough candidate list for a pattern. Results only need to
/// match loosely; refinement narrows them afterwards.
pub trait MatchSource: Send + Sync {
    fn fetch(&self, pattern: &str) -> Result<Vec<String>, SourceError>;
}
