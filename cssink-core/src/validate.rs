use crate::{Error, Result};

/// Heuristic sanity check, not a CSS parser: only gross brace mismatches are
/// caught. Invoked when debug mode is on.
pub(crate) fn assert_balanced_braces(styles: &str) -> Result<()> {
    let mut open = 0usize;
    let mut close = 0usize;
    for c in styles.chars() {
        match c {
            '{' => open += 1,
            '}' => close += 1,
            _ => {}
        }
    }
    if open != close {
        return Err(Error::MalformedStyle { open, close });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_text_passes() {
        assert_eq!(assert_balanced_braces(".a { color: red; }"), Ok(()));
        assert_eq!(assert_balanced_braces(""), Ok(()));
    }

    #[test]
    fn mismatch_is_reported_with_counts() {
        assert_eq!(
            assert_balanced_braces(".a { color: red;"),
            Err(Error::MalformedStyle { open: 1, close: 0 })
        );
        assert_eq!(
            assert_balanced_braces(".a { b { } } }"),
            Err(Error::MalformedStyle { open: 2, close: 3 })
        );
    }
}
