pub mod clean;
pub mod env_config;
pub mod matching;
pub mod refine;
pub mod suggest;
pub mod text;
pub mod truncate;
pub mod type_errors;
