//! Logger registry: configuration resolution and lookup
//!
//! The registry turns one declarative [`LoggerOptions`] into concrete
//! [`Logger`] instances, exactly once per generation. It is an explicit
//! object owned by the composition root; there is no process-global state.
//! A generation ends only with [`LoggerRegistry::reset`], after which the
//! next `build` re-resolves from whatever configuration it is given.

use super::config::{
    BuiltinFormatter, BuiltinWriter, FormatterSpec, LoggerConfig, LoggerOptions, PairSpec,
    WriterSpec,
};
use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::logger::{FormatterWriterPair, Logger};
use super::timestamp::{default_timestamp_source, TimestampSource};
use crate::formatters::{DefaultFormatter, JsonFormatter, LogFormatter, XmlFormatter};
use crate::writers::{ConsoleWriter, LogWriter};
use std::collections::HashMap;
use std::sync::Arc;

const DEFAULT_LEVEL: LogLevel = LogLevel::Debug;

pub struct LoggerRegistry {
    default_logger: Option<Arc<Logger>>,
    loggers: HashMap<String, Arc<Logger>>,
    built: bool,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self {
            default_logger: None,
            loggers: HashMap::new(),
            built: false,
        }
    }

    /// Resolve the configuration and construct all loggers.
    ///
    /// Runs at most once per generation: calling `build` again without an
    /// intervening [`reset`](Self::reset) is a no-op that keeps the already
    /// built logger instances.
    pub fn build(&mut self, options: LoggerOptions) {
        if self.built {
            return;
        }

        let mut options = options;
        Self::complete_default_config(&mut options.default);
        for config in options.named_loggers.values_mut() {
            Self::complete_pairs(config);
        }

        let timestamp = options
            .timestamp
            .clone()
            .unwrap_or_else(default_timestamp_source);

        for (name, config) in &options.named_loggers {
            let logger = Self::build_logger(config, &timestamp, Some(name.clone()));
            self.loggers.insert(name.clone(), Arc::new(logger));
        }
        let default_logger = Self::build_logger(&options.default, &timestamp, None);
        self.default_logger = Some(Arc::new(default_logger));
        self.built = true;
    }

    /// Fill every unset field of the default config: threshold and pair
    /// declarations.
    fn complete_default_config(config: &mut LoggerConfig) {
        if config.default_level.is_none() {
            config.default_level = Some(DEFAULT_LEVEL);
        }
        Self::complete_pairs(config);
    }

    /// Guarantee a non-empty pair list with every slot set. Named configs do
    /// not inherit the default config's threshold; each is independently
    /// defaulted.
    fn complete_pairs(config: &mut LoggerConfig) {
        if config.pairs.is_empty() {
            config.pairs.push(Self::default_pair_spec());
        }
        for pair in &mut config.pairs {
            if pair.formatter.is_none() {
                pair.formatter = Some(FormatterSpec::Builtin(BuiltinFormatter::Default));
            }
            if pair.writer.is_none() {
                pair.writer = Some(WriterSpec::Builtin(BuiltinWriter::Default));
            }
        }
    }

    fn default_pair_spec() -> PairSpec {
        PairSpec::new()
            .formatter(FormatterSpec::Builtin(BuiltinFormatter::Default))
            .writer(WriterSpec::Builtin(BuiltinWriter::Default))
    }

    /// Instantiate a formatter from its resolved spec. Unset slots resolve
    /// to the built-in default implementation.
    fn create_formatter(spec: Option<&FormatterSpec>) -> Box<dyn LogFormatter> {
        match spec {
            None | Some(FormatterSpec::Builtin(BuiltinFormatter::Default)) => {
                Box::new(DefaultFormatter::new())
            }
            Some(FormatterSpec::Builtin(BuiltinFormatter::Json)) => Box::new(JsonFormatter::new()),
            Some(FormatterSpec::Builtin(BuiltinFormatter::Xml)) => Box::new(XmlFormatter::new()),
            Some(FormatterSpec::Custom(factory)) => factory(),
        }
    }

    fn create_writer(spec: Option<&WriterSpec>) -> Box<dyn LogWriter> {
        match spec {
            None | Some(WriterSpec::Builtin(BuiltinWriter::Default)) => {
                Box::new(ConsoleWriter::new())
            }
            Some(WriterSpec::Custom(factory)) => factory(),
        }
    }

    fn build_logger(
        config: &LoggerConfig,
        timestamp: &TimestampSource,
        name: Option<String>,
    ) -> Logger {
        let pairs = config
            .pairs
            .iter()
            .map(|spec| {
                FormatterWriterPair::new(
                    Self::create_formatter(spec.formatter.as_ref()),
                    Self::create_writer(spec.writer.as_ref()),
                    spec.name.clone(),
                )
            })
            .collect();

        Logger::new(
            name,
            config.default_level.unwrap_or(DEFAULT_LEVEL),
            Arc::clone(timestamp),
            config.extended_payload.clone(),
            pairs,
        )
    }

    /// Look up a logger. `None` returns the default logger; an unknown name
    /// fails rather than falling back to the default.
    pub fn logger(&self, name: Option<&str>) -> Result<Arc<Logger>> {
        let default = self.default_logger.as_ref().ok_or(LoggerError::NotBuilt)?;
        match name {
            None => Ok(Arc::clone(default)),
            Some(name) => self
                .loggers
                .get(name)
                .map(Arc::clone)
                .ok_or_else(|| LoggerError::unknown_logger(name)),
        }
    }

    /// Set the threshold on the default logger and every named logger.
    pub fn set_level(&self, level: LogLevel) {
        for logger in self.loggers.values() {
            logger.set_level(level);
        }
        if let Some(default) = &self.default_logger {
            default.set_level(level);
        }
    }

    /// Set the threshold on one logger, the default one if no name is given.
    pub fn set_level_for(&self, level: LogLevel, name: Option<&str>) -> Result<()> {
        self.logger(name)?.set_level(level);
        Ok(())
    }

    /// Names of all configured named loggers, for diagnostics.
    pub fn logger_names(&self) -> Vec<&str> {
        self.loggers.keys().map(String::as_str).collect()
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Invalidate the current generation. Existing `Arc<Logger>` handles
    /// stay valid but the registry forgets them; the next `build` resolves
    /// from scratch.
    pub fn reset(&mut self) {
        self.default_logger = None;
        self.loggers.clear();
        self.built = false;
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
