/// Replaces every occurrence of the marker with `replacement`.
///
/// A fresh scan per call; no matcher state is shared between substitutions.
pub(crate) fn substitute_marker(source: &str, marker: &str, replacement: &str) -> String {
    if marker.is_empty() {
        return source.to_string();
    }
    source.replace(marker, replacement)
}
