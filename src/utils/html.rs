//! Escaping for values placed into markup and inline scripts

use serde::Serialize;

use crate::error::Result;

/// Escape text for use in HTML element content or quoted attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Serialize a list as a JavaScript array literal, one space after each comma.
///
/// The result is safe inside a `<script>` element: a `</` sequence in any
/// string value is written as `<\/` so it cannot close the element.
pub fn js_array<T: Serialize>(items: &[T]) -> Result<String> {
    let parts = items
        .iter()
        .map(serde_json::to_string)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(format!("[{}]", parts.join(", ")).replace("</", "<\\/"))
}

/// Serialize a single string as a script-safe JavaScript string literal.
pub fn js_string(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Sami.vet"), "Sami.vet");
        assert_eq!(escape_html("CPA < $13 USD"), "CPA &lt; $13 USD");
        assert_eq!(
            escape_html(r#"<a href="x">R&D's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_js_array_numbers() {
        assert_eq!(js_array(&[15u8, 20, 10]).unwrap(), "[15, 20, 10]");
        assert_eq!(js_array(&[9.5f32, 0.0]).unwrap(), "[9.5, 0.0]");
        assert_eq!(js_array::<u8>(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_js_array_strings_are_script_safe() {
        let out = js_array(&["MyVete", "</script><script>alert(1)"]).unwrap();
        assert_eq!(out, r#"["MyVete", "<\/script><script>alert(1)"]"#);
        assert!(!out.contains("</script>"));
    }

    #[test]
    fn test_js_string() {
        assert_eq!(js_string("Provet Cloud").unwrap(), r#""Provet Cloud""#);
        assert_eq!(js_string("a</b").unwrap(), r#""a<\/b""#);
    }
}
