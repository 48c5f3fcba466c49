//! Server-rendered HTML pages
//!
//! Every page is built from [`layout`]; all user-provided text goes
//! through [`escape`] before it reaches the markup.

pub mod posts;
pub mod users;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(s: &str) -> String {
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

/// Wrap page content in the shared document shell.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} · Blogly</title>
</head>
<body>
  <nav><a href="/users">Blogly</a></nav>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// Error page for 4xx/5xx responses.
pub fn error_page(status: u16, reason: &str, message: &str) -> String {
    let body = format!(
        "    <h1>{status} {reason}</h1>\n    <p>{message}</p>\n    <p><a href=\"/users\">Back to users</a></p>",
        status = status,
        reason = escape(reason),
        message = escape(message),
    );
    layout(reason, &body)
}

/// A labelled text input.
pub(crate) fn text_input(name: &str, label: &str, value: &str) -> String {
    format!(
        "      <p><label for=\"{name}\">{label}</label> <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\"></p>\n",
        name = name,
        label = escape(label),
        value = escape(value),
    )
}

/// A POST-only delete button.
pub(crate) fn delete_button(action: &str, label: &str) -> String {
    format!(
        "    <form method=\"POST\" action=\"{action}\"><button type=\"submit\">{label}</button></form>\n",
        action = escape(action),
        label = escape(label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn layout_escapes_title_not_body() {
        let html = layout("<Users>", "<h1>Users</h1>");
        assert!(html.contains("<title>&lt;Users&gt; · Blogly</title>"));
        assert!(html.contains("<h1>Users</h1>"));
    }

    #[test]
    fn error_page_shows_status() {
        let html = error_page(404, "Not Found", "user '7' not found");
        assert!(html.contains("<h1>404 Not Found</h1>"));
        assert!(html.contains("user &#39;7&#39; not found"));
    }
}
