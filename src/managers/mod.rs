pub mod strategy;

pub use strategy::{Arrangement, BuiltinStrategy, Strategy, BUILTIN_STRATEGIES};
