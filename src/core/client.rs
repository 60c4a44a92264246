//! Named log clients
//!
//! A [`LogClient`] is the handle application code logs through. Clients are
//! created and owned by a [`Logger`](super::Logger); each holds only a weak
//! reference back to it, so a client outliving its logger simply reports
//! [`LoggerError::LoggerStopped`].

use super::error::{LoggerError, Result};
use super::level::Level;
use super::logger::LoggerShared;
use parking_lot::RwLock;
use std::fmt::{self, Display};
use std::sync::{Arc, Weak};

pub struct LogClient {
    name: Arc<str>,
    min_level: RwLock<Option<Level>>,
    owner: Weak<LoggerShared>,
}

impl LogClient {
    pub(crate) fn new(name: &str, owner: Weak<LoggerShared>) -> Self {
        Self {
            name: Arc::from(name),
            min_level: RwLock::new(None),
            owner,
        }
    }

    /// The client's name; empty for the default client
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// Per-client minimum level, if one was set
    pub fn min_level(&self) -> Option<Level> {
        *self.min_level.read()
    }

    /// Override the logger's global level for this client; `None` clears it
    pub fn set_min_level(&self, level: Option<Level>) {
        *self.min_level.write() = level;
    }

    /// The level that currently decides whether this client's entries are kept
    pub fn effective_min_level(&self) -> Result<Level> {
        let owner = self.owner()?;
        Ok(owner.effective_min_level(self))
    }

    /// Whether an entry at `level` would currently be queued
    pub fn enabled(&self, level: Level) -> bool {
        match self.owner.upgrade() {
            Some(owner) => super::level::should_emit(level, owner.effective_min_level(self)),
            None => false,
        }
    }

    fn owner(&self) -> Result<Arc<LoggerShared>> {
        self.owner.upgrade().ok_or(LoggerError::LoggerStopped)
    }

    /// Expand `template` with `args` and queue the result at `level`
    ///
    /// # Example
    ///
    /// ```
    /// use easy_log::{Level, Logger};
    ///
    /// let logger = Logger::new().unwrap();
    /// let client = logger.client("db");
    /// client.submit(Level::Info, "connected to {0} in {1} ms", &[&"primary", &12]).unwrap();
    /// assert_eq!(logger.queued_len(), 1);
    /// ```
    pub fn submit(&self, level: Level, template: &str, args: &[&dyn Display]) -> Result<()> {
        let owner = self.owner()?;
        let message = owner.formatter().format(template, args)?;
        owner.queue_write(self, level, message)
    }

    /// Like [`submit`](Self::submit), but does nothing when `condition` is false
    ///
    /// The template is not expanded when the condition fails.
    pub fn submit_if(
        &self,
        level: Level,
        template: &str,
        condition: bool,
        args: &[&dyn Display],
    ) -> Result<()> {
        if !condition {
            return Ok(());
        }
        self.submit(level, template, args)
    }

    /// Queue a finished message at `level`
    ///
    /// The message is taken as-is, without template expansion. Submissions
    /// after the logger stopped are ignored.
    pub fn log(&self, level: Level, message: impl Into<String>) {
        if let Some(owner) = self.owner.upgrade() {
            let _ = owner.queue_write(self, level, message.into());
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(Level::Critical, message);
    }

    #[inline]
    pub fn debug_if(&self, message: impl Into<String>, condition: bool) {
        if condition {
            self.debug(message);
        }
    }

    #[inline]
    pub fn info_if(&self, message: impl Into<String>, condition: bool) {
        if condition {
            self.info(message);
        }
    }

    #[inline]
    pub fn warn_if(&self, message: impl Into<String>, condition: bool) {
        if condition {
            self.warn(message);
        }
    }

    #[inline]
    pub fn error_if(&self, message: impl Into<String>, condition: bool) {
        if condition {
            self.error(message);
        }
    }

    #[inline]
    pub fn critical_if(&self, message: impl Into<String>, condition: bool) {
        if condition {
            self.critical(message);
        }
    }
}

impl fmt::Debug for LogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogClient")
            .field("name", &self.name)
            .field("min_level", &self.min_level())
            .finish()
    }
}
