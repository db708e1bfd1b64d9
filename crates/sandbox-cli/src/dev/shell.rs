//! HTML shell for sandboxes served from a synthesized entry module.

use crate::dev::convention::ROOT_ELEMENT_ID;

/// Render the page that loads a sandbox's bootstrap module.
///
/// The script is referenced relative to the page (`./__entry.tsx`), so the
/// sandbox must be requested with a trailing slash; the router redirects
/// `/<name>` to `/<name>/` for exactly this reason.
pub fn render_shell(name: &str, entry_file: &str, lang: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="{lang}">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
  </head>
  <body>
    <div id="{root}"></div>
    <script type="module" src="./{entry}"></script>
  </body>
</html>
"#,
        lang = html_escape(lang),
        title = html_escape(name),
        root = ROOT_ELEMENT_ID,
        entry = html_escape(entry_file),
    )
}

/// Escape the characters that are significant in HTML text and attributes.
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
