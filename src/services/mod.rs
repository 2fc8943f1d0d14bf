pub mod engine;
pub mod logger;
pub mod registry;
pub mod validation;
