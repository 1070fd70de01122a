//! Browser backend for the cssink pipeline.
//!
//! Provides the two DOM insertion strategies (text `<style>` element and
//! constructable stylesheet), a zero-delay `setTimeout` scheduler for batch
//! flushes, and the constructable-stylesheet capability probe. Bundle them
//! with [`backend`] and hand the result to a
//! [`StyleRegistry`](cssink_core::StyleRegistry).

use std::cell::RefCell;

use cssink_core::{Backend, Capabilities, Error, ResolvedMode, Result, Scheduler, SystemClock};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Bound directly rather than through web-sys: parts of the constructable
// stylesheet interface are still behind web-sys' unstable-API cfg.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = CSSStyleSheet)]
    type ConstructableSheet;

    #[wasm_bindgen(constructor, catch, js_class = "CSSStyleSheet")]
    fn new() -> std::result::Result<ConstructableSheet, JsValue>;

    #[wasm_bindgen(method, catch, js_name = replaceSync)]
    fn replace_sync(this: &ConstructableSheet, css: &str) -> std::result::Result<(), JsValue>;
}

const ADOPTED_SHEETS: &str = "adoptedStyleSheets";

thread_local! {
    static TARGET: RefCell<Option<web_sys::Element>> = RefCell::new(None);
}

/// Overrides the element that receives `<style>` tags. Defaults to
/// `document.head`.
pub fn set_insertion_target(element: web_sys::Element) {
    TARGET.with(|target| *target.borrow_mut() = Some(element));
}

fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| Error::Insertion("no document in this context".to_string()))
}

fn js_err(err: JsValue) -> Error {
    Error::Insertion(format!("{err:?}"))
}

/// Probes constructable-stylesheet support. Run once at startup; the result
/// rides into the registry via [`Capabilities`] and is never re-queried.
pub fn detect_capabilities() -> Capabilities {
    let probe = || {
        let document = web_sys::window()?.document()?;
        let sheet = ConstructableSheet::new().ok()?;
        let adopted =
            js_sys::Reflect::has(document.as_ref(), &JsValue::from_str(ADOPTED_SHEETS)).ok()?;
        let replace =
            js_sys::Reflect::has(sheet.as_ref(), &JsValue::from_str("replaceSync")).ok()?;
        Some(adopted && replace)
    };
    Capabilities {
        constructable_stylesheets: probe().unwrap_or(false),
    }
}

/// Commits finished CSS to the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSink;

impl DocumentSink {
    fn append_style_element(&self, css: &str) -> Result<()> {
        let document = document()?;
        let style = document.create_element("style").map_err(js_err)?;
        style.set_attribute("type", "text/css").map_err(js_err)?;
        style.set_inner_html(css);

        let target = TARGET.with(|target| target.borrow().clone());
        let target: web_sys::Element = match target {
            Some(element) => element,
            None => document
                .head()
                .ok_or_else(|| Error::Insertion("document has no <head>".to_string()))?
                .into(),
        };
        target.append_child(&style).map_err(js_err)?;
        Ok(())
    }

    fn append_adopted_sheet(&self, css: &str) -> Result<()> {
        let document = document()?;
        let sheet = ConstructableSheet::new().map_err(js_err)?;
        sheet.replace_sync(css).map_err(js_err)?;

        let key = JsValue::from_str(ADOPTED_SHEETS);
        let current = js_sys::Reflect::get(document.as_ref(), &key).map_err(js_err)?;
        let sheets = js_sys::Array::from(&current);
        sheets.push(sheet.as_ref());
        js_sys::Reflect::set(document.as_ref(), &key, sheets.as_ref()).map_err(js_err)?;
        Ok(())
    }
}

impl cssink_core::StyleSink for DocumentSink {
    fn insert(&self, css: &str, mode: ResolvedMode) -> Result<()> {
        match mode {
            ResolvedMode::StyleElement => self.append_style_element(css),
            ResolvedMode::AdoptedSheet => self.append_adopted_sheet(css),
        }
    }
}

/// Zero-delay `setTimeout`; tasks run FIFO on the host event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn defer(&self, task: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(task);
        let Some(window) = web_sys::window() else {
            log::error!("no window to schedule a deferred flush on");
            return;
        };
        if let Err(err) =
            window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0)
        {
            log::error!("failed to schedule deferred flush: {err:?}");
        }
    }
}

/// The full browser backend for a registry: system clock, `setTimeout`
/// scheduling, DOM sink, probed capabilities.
pub fn backend() -> Backend {
    Backend {
        clock: Box::new(SystemClock),
        scheduler: Box::new(TimeoutScheduler),
        sink: Box::new(DocumentSink),
        capabilities: detect_capabilities(),
    }
}
