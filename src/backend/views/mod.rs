//! HTML Views
//!
//! Server-rendered pages. Every page shares the layout in [`layout`], whose
//! navigation bar depends on whether a user is logged in. Form pages accept
//! an optional message which is shown above the form; this replaces a
//! flash-message side channel.
//!
//! - **`layout`** - Page skeleton, navigation and HTML escaping
//! - **`pages`** - Index, login and register pages

pub mod layout;
pub mod pages;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

pub use pages::{render_index_page, render_login_page, render_register_page};

/// `302 Found` redirect to `location`
pub fn redirect(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
