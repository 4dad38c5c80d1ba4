//! HTML escaping for user-supplied text.

/// Escape the HTML-significant characters in `input`.
///
/// `&` becomes `&amp;`, `<` `&lt;`, `>` `&gt;` and `"` `&quot;`. Apostrophes
/// pass through unchanged. Done in a single pass, so entities produced here are never escaped twice.
///
/// # Example
///
/// ```
/// use contact_relay::render::escape_html;
///
/// assert_eq!(escape_html("Jo <b>"), "Jo &lt;b&gt;");
/// assert_eq!(escape_html("&lt;"), "&amp;lt;");
/// ```
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
