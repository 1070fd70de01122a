//! The style-registration pipeline.
//!
//! A [`StyleRegistry`] owns the ambient [`Config`], the monotonic identifier
//! state and the pending batch, and drives registration end to end: mint a
//! class name, substitute the marker, optionally validate, then commit
//! through the injected [`Backend`].
//!
//! Single-threaded by design: shared state lives behind `Rc`/`RefCell`, and
//! the only suspension point is the deferred batch flush. Registration calls
//! must not re-enter the registry synchronously (no guard is installed).

use std::cell::RefCell;
use std::fmt;
use std::fmt::Display;
use std::rc::{Rc, Weak};

use crate::class_names::{class_names, ClassFragment};
use crate::clock::{Clock, SystemClock};
use crate::config::{AppendStrategy, Config, ConfigUpdate, InsertionMode};
use crate::ident::{self, UidSource};
use crate::schedule::{InlineScheduler, Scheduler};
use crate::sink::{Capabilities, MemorySink, ResolvedMode, StyleSink};
use crate::substitute::substitute_marker;
use crate::validate::assert_balanced_braces;
use crate::{Error, Result};

/// Everything the pipeline needs from its host, bundled for injection.
pub struct Backend {
    pub clock: Box<dyn Clock>,
    pub scheduler: Box<dyn Scheduler>,
    pub sink: Box<dyn StyleSink>,
    pub capabilities: Capabilities,
}

impl Backend {
    /// In-memory backend: system clock, inline scheduling, recording sink.
    /// The default on hosts without a document; the returned [`MemorySink`]
    /// clone observes everything the registry inserts.
    pub fn memory() -> (Self, MemorySink) {
        let sink = MemorySink::new();
        let backend = Self {
            clock: Box::new(SystemClock),
            scheduler: Box::new(InlineScheduler),
            sink: Box::new(sink.clone()),
            capabilities: Capabilities::default(),
        };
        (backend, sink)
    }
}

/// Picks the concrete insertion strategy for one flush.
///
/// Resolved per flush, never cached, so configuration changes between
/// scheduling and flush take effect. `Auto` on a host without constructable
/// stylesheets silently degrades to a `<style>` element; only an
/// unrecognized mode name is an error.
pub fn resolve_mode(
    mode: &InsertionMode,
    capabilities: Capabilities,
    debug: bool,
) -> Result<ResolvedMode> {
    let sheets = capabilities.constructable_stylesheets;
    match mode {
        InsertionMode::StyleElement => Ok(ResolvedMode::StyleElement),
        // Debug wants visible, inspectable <style> tags.
        InsertionMode::Sheet if !sheets || debug => Ok(ResolvedMode::StyleElement),
        InsertionMode::Sheet => Ok(ResolvedMode::AdoptedSheet),
        InsertionMode::Auto if sheets && !debug => Ok(ResolvedMode::AdoptedSheet),
        InsertionMode::Auto => Ok(ResolvedMode::StyleElement),
        InsertionMode::Other(name) => Err(Error::InvalidConfiguration(name.clone())),
    }
}

struct Shared {
    config: RefCell<Config>,
    pending: RefCell<Option<String>>,
    uids: UidSource,
    backend: Backend,
}

impl Shared {
    /// Takes and commits the pending batch, if any.
    fn flush_pending(&self) -> Result<()> {
        let styles = self.pending.borrow_mut().take();
        match styles {
            Some(styles) => self.insert_now(&styles),
            None => Ok(()),
        }
    }

    fn insert_now(&self, styles: &str) -> Result<()> {
        let (mode, verbose) = {
            let config = self.config.borrow();
            let mode = resolve_mode(&config.mode, self.backend.capabilities, config.debug)?;
            (mode, config.verbose)
        };
        self.backend.sink.insert(styles, mode)?;
        if verbose {
            log::trace!("inserted styles as {mode:?}: {styles}");
        }
        Ok(())
    }
}

/// Handle to one registration pipeline. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct StyleRegistry {
    shared: Rc<Shared>,
}

impl StyleRegistry {
    pub fn new(backend: Backend) -> Self {
        Self::with_config(Config::default(), backend)
    }

    pub fn with_config(config: Config, backend: Backend) -> Self {
        let uids = UidSource::new(backend.clock.as_ref());
        Self {
            shared: Rc::new(Shared {
                config: RefCell::new(config),
                pending: RefCell::new(None),
                uids,
                backend,
            }),
        }
    }

    /// Shallow-merges `update` into the ambient configuration. Nothing is
    /// validated here; an unrecognized insertion mode only surfaces once a
    /// flush has to resolve it.
    pub fn configure(&self, update: ConfigUpdate) {
        update.merge_into(&mut self.shared.config.borrow_mut());
    }

    /// Snapshot of the ambient configuration.
    pub fn config(&self) -> Config {
        self.shared.config.borrow().clone()
    }

    /// Next time-based identifier, rendered in `radix`.
    pub fn uid(&self, radix: u32) -> String {
        self.shared
            .uids
            .next(self.shared.backend.clock.as_ref(), radix)
    }

    /// Registers a template-literal style block and returns the generated
    /// class name.
    ///
    /// `parts` and stringified `params` are interleaved in order, with any
    /// trailing part appended. Every marker occurrence in the result becomes
    /// the `.{class}` selector; a marker-free block is inserted verbatim and
    /// the class name is still returned for the caller to use.
    pub fn register_style(&self, parts: &[&str], params: &[&dyn Display]) -> Result<String> {
        let mut styles = String::new();
        for (i, part) in parts.iter().enumerate() {
            styles.push_str(part);
            if let Some(param) = params.get(i) {
                styles.push_str(&param.to_string());
            }
        }
        self.register_raw(styles)
    }

    /// Registers an already-assembled style block.
    pub fn register_raw(&self, styles: String) -> Result<String> {
        let (class_name, styles, debug, verbose, append) = {
            let config = self.shared.config.borrow();
            let body = if config.hash_ids {
                ident::to_radix(u64::from(ident::hash(&styles)), ident::DEFAULT_RADIX)
            } else {
                self.shared
                    .uids
                    .next(self.shared.backend.clock.as_ref(), ident::DEFAULT_RADIX)
            };
            let class_name = format!("{}_{}", config.prefix, body);
            let selector = format!(".{class_name}");
            let styles = substitute_marker(&styles, &config.marker, &selector);
            (class_name, styles, config.debug, config.verbose, config.append)
        };

        if verbose {
            log::trace!("registering styles ({append:?}): {styles}");
        }
        // Validation aborts before any insertion is scheduled.
        if debug {
            assert_balanced_braces(&styles)?;
        }

        self.append_styles(styles)?;
        Ok(class_name)
    }

    /// Registers the style and returns a scoped handle bound to the class.
    pub fn css(&self, parts: &[&str], params: &[&dyn Display]) -> Result<ScopedClass> {
        let class_name = self.register_style(parts, params)?;
        Ok(self.class_builder(class_name))
    }

    /// Scoped handle for an arbitrary base identifier.
    pub fn class_builder(&self, base: impl Into<String>) -> ScopedClass {
        ScopedClass {
            name: base.into(),
            registry: self.clone(),
        }
    }

    fn append_styles(&self, styles: String) -> Result<()> {
        let append = self.shared.config.borrow().append;
        match append {
            AppendStrategy::Each => self.shared.insert_now(&styles),
            AppendStrategy::Batch => {
                let mut pending = self.shared.pending.borrow_mut();
                match pending.take() {
                    Some(mut batch) => {
                        batch.push('\n');
                        batch.push_str(&styles);
                        *pending = Some(batch);
                    }
                    None => {
                        *pending = Some(styles);
                        drop(pending);
                        self.schedule_flush();
                    }
                }
                Ok(())
            }
        }
    }

    fn schedule_flush(&self) {
        // Weak so a scheduled task never keeps a dropped registry alive; the
        // flush then simply has nothing to do.
        let shared = Rc::downgrade(&self.shared);
        self.shared.backend.scheduler.defer(Box::new(move || {
            flush_task(&shared);
        }));
    }
}

fn flush_task(shared: &Weak<Shared>) {
    let Some(shared) = shared.upgrade() else {
        return;
    };
    // The deferred callback has no caller to return to.
    if let Err(err) = shared.flush_pending() {
        log::error!("deferred style flush failed: {err}");
    }
}

impl fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("config", &self.shared.config.borrow())
            .field("pending", &self.shared.pending.borrow().is_some())
            .finish_non_exhaustive()
    }
}

/// Handle bound to one generated class name.
///
/// Composes further class-name fragments while keeping the base name
/// referenceable: marker occurrences inside composed results collapse to the
/// bare base name, which supports nested/self-referential selector use.
#[derive(Clone)]
pub struct ScopedClass {
    name: String,
    registry: StyleRegistry,
}

impl ScopedClass {
    /// The bare generated class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class list starting with the bound name.
    pub fn apply(&self, fragments: &[ClassFragment<'_>]) -> String {
        let rest = class_names(fragments);
        let mut combined = self.name.clone();
        if !rest.is_empty() {
            combined.push(' ');
            combined.push_str(&rest);
        }
        self.substitute(combined)
    }

    /// Same composition without the bound name prefix.
    pub fn inner(&self, fragments: &[ClassFragment<'_>]) -> String {
        self.substitute(class_names(fragments))
    }

    fn substitute(&self, text: String) -> String {
        // The marker is read at call time, like every other ambient setting.
        let marker = self.registry.shared.config.borrow().marker.clone();
        substitute_marker(&text, &marker, &self.name)
    }
}

impl fmt::Display for ScopedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for ScopedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScopedClass").field(&self.name).finish()
    }
}

impl AsRef<str> for ScopedClass {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl From<ScopedClass> for String {
    fn from(class: ScopedClass) -> String {
        class.name
    }
}
