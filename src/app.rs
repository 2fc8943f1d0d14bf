use crate::constants::registry::TYPE_PREFIX;
use crate::errors::AutocompleteError;
use crate::services::engine::Engine;
use crate::services::logger::Logger;
use crate::services::registry::StrategyRegistry;
use crate::stores::MatchSource;
use std::sync::Arc;

pub struct App {
    pub logger: Logger,
    pub registry: Arc<StrategyRegistry>,
}

impl App {
    fn validate_strategy_wiring(registry: &StrategyRegistry) -> Result<(), AutocompleteError> {
        let mut unreachable = Vec::new();
        for (identifier, type_name) in registry.identifiers().iter().zip(registry.type_names()) {
            match registry.resolve(identifier) {
                Ok(strategy) if strategy.type_name() == type_name => {}
                _ => unreachable.push(type_name.to_string()),
            }
        }
        if unreachable.is_empty() {
            return Ok(());
        }
        unreachable.sort();
        Err(AutocompleteError::internal("Strategy wiring is incomplete")
            .with_hint(format!(
                "Every registered type name must be {} plus the camel-cased type identifier.",
                TYPE_PREFIX
            ))
            .with_details(serde_json::json!({ "unreachable_types": unreachable })))
    }

    pub fn initialize() -> Result<Self, AutocompleteError> {
        Self::with_registry(StrategyRegistry::builtin())
    }

    pub fn with_registry(registry: StrategyRegistry) -> Result<Self, AutocompleteError> {
        let logger = Logger::new("autocomplete");
        Self::validate_strategy_wiring(&registry)?;
        logger.debug(
            "initialized",
            Some(&serde_json::json!({ "types": registry.identifiers() })),
        );
        Ok(Self {
            logger,
            registry: Arc::new(registry),
        })
    }

    pub fn engine(
        &self,
        identifier: &str,
        source: Arc<dyn MatchSource>,
    ) -> Result<Engine, AutocompleteError> {
        let strategy = self.registry.resolve(identifier)?;
        Ok(Engine::new(self.logger.clone(), strategy, source))
    }
}
