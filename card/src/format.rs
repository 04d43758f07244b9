//! Display formatting shared by cards and the page

/// Capitalize the first letter of every whitespace-delimited word.
///
/// Remaining letters are left as they are, so `"mr-mime"` becomes `"Mr-mime"`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word_start = true;

    for c in name.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = c.is_whitespace();
    }

    out
}

/// Scale a decimetre/hectogram value by 0.1 and format to one decimal place
pub fn decimetric(raw: u32) -> String {
    format!("{:.1}", f64::from(raw) * 0.1)
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }

    out
}
