//! Name-indexed logger registry

use super::logger::Logger;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Maps logger names to loggers.
///
/// Creating a logger under a name already in use replaces the registry
/// entry. Handles to the replaced logger keep working; they are just no
/// longer reachable through [`get`](Self::get).
///
/// # Example
///
/// ```
/// use rust_named_logger::LoggerRegistry;
/// use std::sync::Arc;
///
/// let registry = LoggerRegistry::new();
/// let first = registry.create("http");
/// let second = registry.create("http");
///
/// assert!(!Arc::ptr_eq(&first, &second));
/// assert!(Arc::ptr_eq(&registry.get("http").unwrap(), &second));
/// assert!(registry.get("db").is_none());
/// ```
#[derive(Default)]
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry behind [`new_logger`] and [`get_logger`].
    pub fn global() -> &'static LoggerRegistry {
        static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();
        GLOBAL.get_or_init(LoggerRegistry::new)
    }

    /// Create a logger with default settings and register it under `name`.
    pub fn create(&self, name: &str) -> Arc<Logger> {
        self.insert(Logger::new(name))
    }

    /// Register an already configured logger under its own name.
    pub fn insert(&self, logger: Logger) -> Arc<Logger> {
        let logger = Arc::new(logger);
        self.loggers
            .write()
            .insert(logger.name().to_string(), Arc::clone(&logger));
        logger
    }

    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}

/// Create and register a logger in the global registry.
pub fn new_logger(name: &str) -> Arc<Logger> {
    LoggerRegistry::global().create(name)
}

/// Look up a logger in the global registry.
pub fn get_logger(name: &str) -> Option<Arc<Logger>> {
    LoggerRegistry::global().get(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogLevel;
    use std::thread;

    #[test]
    fn test_create_and_get() {
        let registry = LoggerRegistry::new();
        assert!(registry.is_empty());

        let logger = registry.create("api");
        let found = registry.get("api").expect("registered");
        assert!(Arc::ptr_eq(&logger, &found));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("api"));
    }

    #[test]
    fn test_missing_name() {
        let registry = LoggerRegistry::new();
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_recreate_detaches_old_handle() {
        let registry = LoggerRegistry::new();
        let old = registry.create("svc");
        old.set_level(LogLevel::DEBUG);

        let new = registry.create("svc");
        assert_eq!(new.level(), LogLevel::INFO);
        assert_eq!(registry.len(), 1);

        // The old handle is still usable on its own
        old.set_level(LogLevel::ERROR);
        assert_eq!(old.level(), LogLevel::ERROR);
        assert_eq!(registry.get("svc").unwrap().level(), LogLevel::INFO);
    }

    #[test]
    fn test_insert_configured_logger() {
        let registry = LoggerRegistry::new();
        let logger = Logger::builder("cfg").level(LogLevel::DEBUG).build().unwrap();
        registry.insert(logger);
        assert_eq!(registry.get("cfg").unwrap().level(), LogLevel::DEBUG);
    }

    #[test]
    fn test_names_sorted() {
        let registry = LoggerRegistry::new();
        registry.create("b");
        registry.create("a");
        assert_eq!(registry.names(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_global_functions() {
        let logger = new_logger("registry-test-global");
        let found = get_logger("registry-test-global").expect("registered globally");
        assert!(Arc::ptr_eq(&logger, &found));
    }

    #[test]
    fn test_concurrent_create_and_get() {
        let registry = Arc::new(LoggerRegistry::new());
        let mut handles = vec![];

        for t in 0..8 {
            let registry = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for i in 0..50 {
                    let name = format!("logger-{}", i % 10);
                    if t % 2 == 0 {
                        registry.create(&name);
                    } else {
                        let _ = registry.get(&name);
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.len(), 10);
    }
}
