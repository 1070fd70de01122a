//! Variable-arity class-name assembly.

/// One class-name fragment, resolved explicitly at the call boundary instead
/// of by runtime type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassFragment<'a> {
    /// Appended verbatim.
    Literal(&'a str),
    /// Each name appended iff its flag is set, in slice order.
    Flags(&'a [(&'a str, bool)]),
    /// Skipped. Stands in for absent input.
    Empty,
}

impl<'a> From<&'a str> for ClassFragment<'a> {
    fn from(text: &'a str) -> Self {
        Self::Literal(text)
    }
}

impl<'a> From<&'a String> for ClassFragment<'a> {
    fn from(text: &'a String) -> Self {
        Self::Literal(text.as_str())
    }
}

impl<'a> From<Option<&'a str>> for ClassFragment<'a> {
    fn from(text: Option<&'a str>) -> Self {
        match text {
            Some(text) => Self::Literal(text),
            None => Self::Empty,
        }
    }
}

impl<'a> From<&'a [(&'a str, bool)]> for ClassFragment<'a> {
    fn from(flags: &'a [(&'a str, bool)]) -> Self {
        Self::Flags(flags)
    }
}

/// Merges fragments into one space-separated, trimmed class string, in input
/// order. Pure and deterministic.
pub fn class_names(fragments: &[ClassFragment<'_>]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        match fragment {
            ClassFragment::Literal(text) => {
                out.push_str(text);
                out.push(' ');
            }
            ClassFragment::Flags(flags) => {
                for (name, enabled) in *flags {
                    if *enabled {
                        out.push_str(name);
                        out.push(' ');
                    }
                }
            }
            ClassFragment::Empty => {}
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn no_fragments_is_empty() {
        assert_eq!(class_names(&[]), "");
    }

    #[test]
    fn literals_join_with_spaces() {
        let result = class_names(&["foo".into(), "bar".into(), "baz".into()]);
        assert_eq!(result, "foo bar baz");
    }

    #[test]
    fn truthy_flags_are_kept_in_order() {
        let flags: &[(&str, bool)] = &[("bar", true), ("baz", false), ("qux", true)];
        assert_eq!(
            class_names(&["foo".into(), ClassFragment::Flags(flags)]),
            "foo bar qux"
        );
    }

    #[test]
    fn empty_fragments_are_skipped() {
        let result = class_names(&[
            "foo".into(),
            ClassFragment::Empty,
            ClassFragment::from(None),
            "bar".into(),
        ]);
        assert_eq!(result, "foo bar");
    }
}
