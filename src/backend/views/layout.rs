/**
 * Page Layout
 *
 * Shared page skeleton: navigation bar, title header and the message shown
 * after a rejected form submission.
 */

use crate::backend::auth::users::User;
use crate::backend::routes::paths;

/// Escape text for use inside HTML element content or quoted attributes
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_nav(user: Option<&User>) -> String {
    let items = match user {
        Some(user) => format!(
            r#"<li><span>{}</span></li><li><a href="{}">Log Out</a></li>"#,
            html_escape(&user.username),
            paths::LOGOUT,
        ),
        None => format!(
            r#"<li><a href="{}">Register</a></li><li><a href="{}">Log In</a></li>"#,
            paths::REGISTER,
            paths::LOGIN,
        ),
    };

    format!(
        r#"<nav><h1><a href="{}">tinyblog</a></h1><ul>{}</ul></nav>"#,
        paths::INDEX,
        items
    )
}

/// Wrap `content` in the shared page skeleton
///
/// `title` and `message` are escaped here; `content` is trusted HTML.
pub fn render_page(title: &str, user: Option<&User>, message: Option<&str>, content: &str) -> String {
    let flash = message
        .map(|m| format!(r#"<div class="flash">{}</div>"#, html_escape(m)))
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>{title} - tinyblog</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
{nav}
<section class="content">
<header><h1>{title}</h1></header>
{flash}
{content}
</section>
</body>
</html>
"#,
        title = html_escape(title),
        nav = render_nav(user),
        flash = flash,
        content = content,
    )
}
