//! Runtime CSS-in-markup.
//!
//! Write CSS template blocks next to the components that use them; each block
//! is registered under a uniquely generated class name and committed to the
//! document (a `<style>` element or a constructable stylesheet, batched per
//! event-loop turn by default). The `&&` placeholder inside a block becomes
//! the generated class selector.
//!
//! ```
//! let style = cssink::css!("&& { color: " { "rebeccapurple" } "; }").unwrap();
//!
//! // The handle composes class lists around the generated name.
//! assert!(style.apply(&["Label".into()]).ends_with(" Label"));
//! ```
//!
//! Everything goes through one ambient [`StyleRegistry`] per thread: browser
//! backed on `wasm32`, in-memory elsewhere. Hosts with their own event loop
//! or document can build a [`StyleRegistry`] around a custom [`Backend`]
//! instead and use the `css!(in registry; ...)` macro form.

use std::fmt::Display;

pub use cssink_core::{
    class_names, hash, resolve_mode, AppendStrategy, Backend, Capabilities, ClassFragment, Clock,
    Config, ConfigUpdate, Error, FakeClock, InlineScheduler, InsertedStyle, InsertionMode,
    ManualScheduler, MemorySink, ResolvedMode, Result, Scheduler, ScopedClass, StyleRegistry,
    StyleSink, SystemClock, DEFAULT_RADIX,
};

mod macros;
pub mod styled;

pub use styled::{styled, styled_in, Styled};

thread_local! {
    static REGISTRY: StyleRegistry = StyleRegistry::new(default_backend());
}

#[cfg(target_arch = "wasm32")]
fn default_backend() -> Backend {
    cssink_web::backend()
}

// Without a document, registered styles accumulate in memory. Server-side
// rendering is explicitly unsupported; this keeps the API total off-browser.
#[cfg(not(target_arch = "wasm32"))]
fn default_backend() -> Backend {
    Backend::memory().0
}

/// Runs `f` against the thread's ambient registry.
pub fn with_registry<R>(f: impl FnOnce(&StyleRegistry) -> R) -> R {
    REGISTRY.with(|registry| f(registry))
}

/// Merges `update` into the ambient configuration.
pub fn configure(update: ConfigUpdate) {
    with_registry(|registry| registry.configure(update));
}

/// Registers a style block against the ambient registry; returns the
/// generated class name. See [`StyleRegistry::register_style`].
pub fn css_rules(parts: &[&str], params: &[&dyn Display]) -> Result<String> {
    with_registry(|registry| registry.register_style(parts, params))
}

/// Registers a style block and returns a [`ScopedClass`] bound to the
/// generated name. The principal entry point; the [`css!`] macro is sugar
/// over it.
pub fn css(parts: &[&str], params: &[&dyn Display]) -> Result<ScopedClass> {
    with_registry(|registry| registry.css(parts, params))
}

/// Scoped class handle for an arbitrary base identifier.
pub fn class_builder(base: impl Into<String>) -> ScopedClass {
    with_registry(|registry| registry.class_builder(base))
}

/// Next time-based identifier from the ambient registry, base 36.
pub fn uid() -> String {
    with_registry(|registry| registry.uid(DEFAULT_RADIX))
}
