//! Ambient pipeline configuration.
//!
//! A [`Config`] is owned by each registry and read in full by every
//! registration call. Updates arrive as a [`ConfigUpdate`], the partial record
//! that [`StyleRegistry::configure`](crate::StyleRegistry::configure) merges
//! in place. Nothing is validated at merge time; an unrecognized insertion
//! mode only surfaces once a flush has to resolve it.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Whether each registered style is committed immediately or coalesced into
/// one insertion per scheduling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppendStrategy {
    /// Insert synchronously, once per registration.
    Each,
    /// Accumulate and flush once on the next turn of the event queue.
    #[default]
    Batch,
}

/// Which DOM mechanism receives finished style text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InsertionMode {
    /// A text-based `<style>` element appended to the target.
    StyleElement,
    /// A constructable stylesheet adopted at document level.
    Sheet,
    /// Constructable stylesheet when supported and debug is off, `<style>`
    /// element otherwise.
    #[default]
    Auto,
    /// An unrecognized mode name. Kept verbatim and rejected lazily, at the
    /// first flush that needs to resolve it.
    Other(String),
}

impl FromStr for InsertionMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s {
            "style" => Self::StyleElement,
            "sheet" => Self::Sheet,
            "auto" => Self::Auto,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for InsertionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StyleElement => f.write_str("style"),
            Self::Sheet => f.write_str("sheet"),
            Self::Auto => f.write_str("auto"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Settings read by every registration call.
///
/// The insertion target is deliberately absent: it belongs to the sink (see
/// `cssink-web`), which is injected rather than configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub append: AppendStrategy,
    pub mode: InsertionMode,
    /// Forces inspectable `<style>` tags and enables brace validation.
    pub debug: bool,
    /// Trace-logs every registration and insertion.
    pub verbose: bool,
    /// Placeholder replaced by the generated class selector. Default `&&`.
    pub marker: String,
    /// Derive identifiers from a content hash instead of the clock.
    pub hash_ids: bool,
    /// Generated class names are `{prefix}_{body}`.
    pub prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            append: AppendStrategy::default(),
            mode: InsertionMode::default(),
            debug: false,
            verbose: false,
            marker: "&&".to_string(),
            hash_ids: false,
            prefix: "css".to_string(),
        }
    }
}

/// Partial [`Config`]; `Some` fields overwrite, `None` fields keep the
/// ambient value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigUpdate {
    pub append: Option<AppendStrategy>,
    pub mode: Option<InsertionMode>,
    pub debug: Option<bool>,
    pub verbose: Option<bool>,
    pub marker: Option<String>,
    pub hash_ids: Option<bool>,
    pub prefix: Option<String>,
}

impl ConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(mut self, append: AppendStrategy) -> Self {
        self.append = Some(append);
        self
    }

    pub fn mode(mut self, mode: InsertionMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    pub fn hash_ids(mut self, hash_ids: bool) -> Self {
        self.hash_ids = Some(hash_ids);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Shallow merge into `config`.
    pub fn merge_into(self, config: &mut Config) {
        if let Some(append) = self.append {
            config.append = append;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(debug) = self.debug {
            config.debug = debug;
        }
        if let Some(verbose) = self.verbose {
            config.verbose = verbose;
        }
        if let Some(marker) = self.marker {
            config.marker = marker;
        }
        if let Some(hash_ids) = self.hash_ids {
            config.hash_ids = hash_ids;
        }
        if let Some(prefix) = self.prefix {
            config.prefix = prefix;
        }
    }
}
