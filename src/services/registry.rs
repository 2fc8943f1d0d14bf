use crate::constants::registry::TYPE_PREFIX;
use crate::errors::AutocompleteError;
use crate::managers::{Strategy, BUILTIN_STRATEGIES};
use crate::services::validation::Validation;
use crate::utils::text::{camel_case, snake_case};
use crate::utils::type_errors::unknown_type_error;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::sync::Arc;

static BUILTIN_REGISTRY: Lazy<StrategyRegistry> = Lazy::new(StrategyRegistry::builtin);

/// Resolves a type identifier such as `species_list` against the built-in
/// strategies.
pub fn resolve(identifier: &str) -> Result<Arc<dyn Strategy>, AutocompleteError> {
    BUILTIN_REGISTRY.resolve(identifier)
}

pub fn builtin_registry() -> &'static StrategyRegistry {
    &BUILTIN_REGISTRY
}

/// Maps registered type names (`AutoCompleteSpeciesList`) to strategies.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: BTreeMap<String, Arc<dyn Strategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for strategy in BUILTIN_STRATEGIES {
            registry.register(Arc::new(*strategy));
        }
        registry
    }

    /// Later registrations under the same type name replace earlier ones.
    pub fn register(&mut self, strategy: Arc<dyn Strategy>) {
        self.strategies
            .insert(strategy.type_name().to_string(), strategy);
    }

    pub fn type_name_for(identifier: &str) -> String {
        format!("{}{}", TYPE_PREFIX, camel_case(identifier))
    }

    pub fn resolve(&self, identifier: &str) -> Result<Arc<dyn Strategy>, AutocompleteError> {
        let identifier = Validation::new()
            .ensure_strategy_identifier(identifier)
            .map_err(|_| unknown_type_error(identifier, &self.identifiers()))?;
        self.strategies
            .get(&Self::type_name_for(&identifier))
            .cloned()
            .ok_or_else(|| unknown_type_error(&identifier, &self.identifiers()))
    }

    /// Identifiers of all registered strategies, derived from their type names.
    pub fn identifiers(&self) -> Vec<String> {
        self.strategies
            .keys()
            .map(|type_name| {
                let name = type_name.as_str();
                snake_case(name.strip_prefix(TYPE_PREFIX).unwrap_or(name))
            })
            .collect()
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.strategies.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
