//! HTML template filling

/// Replaces every occurrence of each key in `template` with its value.
///
/// Keys are applied in iteration order, so a value containing a later key is
/// itself substituted.
///
/// # Examples
/// ```
/// use usend_core::utils::template::replace_html;
///
/// let html = replace_html(
///     "<p>Hi {{name}}, you have {{count}} messages</p>",
///     [("{{name}}", "John".to_string()), ("{{count}}", 3.to_string())],
/// );
/// assert_eq!(html, "<p>Hi John, you have 3 messages</p>");
/// ```
pub fn replace_html<K, V, I>(template: &str, dictionary: I) -> String
where
    K: AsRef<str>,
    V: ToString,
    I: IntoIterator<Item = (K, V)>,
{
    dictionary
        .into_iter()
        .fold(template.to_string(), |filled, (key, value)| {
            let key = key.as_ref();
            if key.is_empty() {
                filled
            } else {
                filled.replace(key, &value.to_string())
            }
        })
}
