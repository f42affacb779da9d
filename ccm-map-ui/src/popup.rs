//! Tooltip markup for the map popup.

use ccm_map::TooltipContent;

/// Escape text for insertion into HTML element content or a quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Popup body: optional flag image followed by one labelled line per field.
pub fn render_popup_html(content: &TooltipContent) -> String {
    let mut html = String::from("<div class=\"ccm-popup\">");
    if let Some(flag) = &content.flag {
        html.push_str(&format!(
            "<img class=\"ccm-flag\" src=\"{}\" alt=\"{}\"/>",
            escape_html(&flag.image_url),
            escape_html(&flag.iso_code)
        ));
    }
    for (label, value) in content.lines() {
        html.push_str(&format!(
            "<div><b>{}:</b> {}</div>",
            label,
            escape_html(&value)
        ));
    }
    html.push_str("</div>");
    html
}
