/**
 * Pages
 *
 * The index page and the register and login forms.
 */

use crate::backend::auth::users::User;
use crate::backend::routes::paths;
use crate::backend::views::layout::{html_escape, render_page};

fn credentials_form(action: &str, submit: &str, username: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
<label for="username">Username</label>
<input name="username" id="username" value="{username}" required>
<label for="password">Password</label>
<input type="password" name="password" id="password" required>
<input type="submit" value="{submit}">
</form>"#,
        action = action,
        username = html_escape(username),
        submit = submit,
    )
}

/// Registration form, optionally showing why the last attempt failed
pub fn render_register_page(user: Option<&User>, message: Option<&str>, username: &str) -> String {
    render_page(
        "Register",
        user,
        message,
        &credentials_form(paths::REGISTER, "Register", username),
    )
}

/// Login form, optionally showing why the last attempt failed
pub fn render_login_page(user: Option<&User>, message: Option<&str>, username: &str) -> String {
    render_page(
        "Log In",
        user,
        message,
        &credentials_form(paths::LOGIN, "Log In", username),
    )
}

/// Landing page
pub fn render_index_page(user: Option<&User>) -> String {
    let content = match user {
        Some(user) => format!(
            "<p>Welcome back, {}.</p>",
            html_escape(&user.username)
        ),
        None => format!(
            r#"<p><a href="{}">Log in</a> or <a href="{}">register</a> to start writing.</p>"#,
            paths::LOGIN,
            paths::REGISTER,
        ),
    };
    render_page("Posts", user, None, &content)
}
