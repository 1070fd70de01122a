//! Where finished CSS text ends up.

use std::cell::RefCell;
use std::rc::Rc;

use crate::Result;

/// Host support, probed once at startup and injected with the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// `new CSSStyleSheet()` plus `document.adoptedStyleSheets` work.
    pub constructable_stylesheets: bool,
}

/// Concrete insertion strategy, picked per flush by
/// [`resolve_mode`](crate::resolve_mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedMode {
    /// Append a text-based `<style>` element to the target.
    StyleElement,
    /// Extend the document's adopted constructable stylesheets.
    AdoptedSheet,
}

/// Commits one unit of finished CSS text. Insertions are append-only for the
/// lifetime of the document; there is no removal.
pub trait StyleSink {
    fn insert(&self, css: &str, mode: ResolvedMode) -> Result<()>;
}

/// Record of one committed insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertedStyle {
    pub css: String,
    pub mode: ResolvedMode,
}

/// In-memory sink: the default on hosts without a document, and the
/// inspection point for tests. Clones share the same record list.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inserted: Rc<RefCell<Vec<InsertedStyle>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.inserted.borrow().len()
    }

    pub fn inserted(&self) -> Vec<InsertedStyle> {
        self.inserted.borrow().clone()
    }
}

impl StyleSink for MemorySink {
    fn insert(&self, css: &str, mode: ResolvedMode) -> Result<()> {
        self.inserted.borrow_mut().push(InsertedStyle {
            css: css.to_string(),
            mode,
        });
        Ok(())
    }
}
