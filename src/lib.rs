pub mod app;
pub mod constants;
pub mod errors;
pub mod managers;
pub mod services;
pub mod stores;
pub mod utils;

pub use app::App;
pub use errors::{AutocompleteError, ErrorKind};
pub use services::engine::{Engine, Query, Suggestions};
pub use services::registry::{resolve, StrategyRegistry};
pub use stores::{MatchSource, MemorySource, SourceError, SqliteSource};
