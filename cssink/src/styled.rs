//! Framework-neutral element wrapping.
//!
//! A [`Styled`] pairs a tag name with everything that belongs in the
//! element's class attribute: the generated class, fixed extra classes from
//! the selector, the caller's own classes and conditional flags. Framework
//! adapters only have to forward [`Styled::class_attr`] to their element
//! builder.

use std::fmt;
use std::fmt::Display;

use cssink_core::{class_names, ClassFragment, Error, Result, ScopedClass, StyleRegistry};

use crate::with_registry;

/// A tag plus the class-attribute pieces a wrapped element carries.
#[derive(Clone)]
pub struct Styled {
    tag: String,
    extra_classes: String,
    class: ScopedClass,
}

impl Styled {
    /// `selector` is `tag.Fixed.Classes`; a missing tag part means `div`,
    /// dot-separated trailing parts become fixed extra classes.
    pub fn new(selector: &str, class: ScopedClass) -> Self {
        let mut parts = selector.split('.');
        let tag = match parts.next() {
            Some("") | None => "div",
            Some(tag) => tag,
        };
        let extra_classes = parts.collect::<Vec<_>>().join(" ");
        Self {
            tag: tag.to_string(),
            extra_classes,
            class,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The scoped handle for the registered style.
    pub fn class(&self) -> &ScopedClass {
        &self.class
    }

    /// Full class attribute for one rendered element: generated class, the
    /// caller's class, fixed extras, then truthy flag names.
    pub fn class_attr(&self, caller_class: Option<&str>, flags: &[(&str, bool)]) -> String {
        let extra = match self.extra_classes.as_str() {
            "" => ClassFragment::Empty,
            extra => ClassFragment::Literal(extra),
        };
        class_names(&[
            ClassFragment::Literal(self.class.name()),
            ClassFragment::from(caller_class),
            extra,
            ClassFragment::Flags(flags),
        ])
    }
}

impl fmt::Debug for Styled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Styled")
            .field("tag", &self.tag)
            .field("class", &self.class.name())
            .field("extra_classes", &self.extra_classes)
            .finish()
    }
}

/// Registers the template against `registry` and wraps the result.
///
/// Blank style text is rejected with [`Error::MissingStyles`]. A template
/// that does not start with the marker is treated as a bare declaration
/// block and wrapped in `marker { ... }` first, so plain property lists
/// work:
///
/// ```
/// let (backend, _sink) = cssink::Backend::memory();
/// let registry = cssink::StyleRegistry::new(backend);
/// let label = cssink::styled_in(&registry, "div.Label", &["color: dimgrey;"], &[]).unwrap();
/// assert_eq!(label.tag(), "div");
/// assert!(label.class_attr(None, &[]).ends_with(" Label"));
/// ```
pub fn styled_in(
    registry: &StyleRegistry,
    selector: &str,
    parts: &[&str],
    params: &[&dyn Display],
) -> Result<Styled> {
    if params.is_empty() && parts.iter().all(|part| part.trim().is_empty()) {
        return Err(Error::MissingStyles);
    }

    let marker = registry.config().marker;
    let bare_block = parts
        .first()
        .map(|first| !first.trim_start().starts_with(&marker))
        .unwrap_or(false);

    let class_name = if bare_block {
        let mut owned: Vec<String> = parts.iter().map(|part| part.to_string()).collect();
        if let Some(first) = owned.first_mut() {
            *first = format!("{marker} {{ {first}");
        }
        if let Some(last) = owned.last_mut() {
            last.push_str(" }");
        }
        let wrapped: Vec<&str> = owned.iter().map(String::as_str).collect();
        registry.register_style(&wrapped, params)?
    } else {
        registry.register_style(parts, params)?
    };

    Ok(Styled::new(selector, registry.class_builder(class_name)))
}

/// [`styled_in`] against the ambient registry.
pub fn styled(selector: &str, parts: &[&str], params: &[&dyn Display]) -> Result<Styled> {
    with_registry(|registry| styled_in(registry, selector, parts, params))
}
