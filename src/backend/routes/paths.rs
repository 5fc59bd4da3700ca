//! URL paths shared by the router, the redirects and the rendered pages.

pub const INDEX: &str = "/";
pub const REGISTER: &str = "/auth/register";
pub const LOGIN: &str = "/auth/login";
pub const LOGOUT: &str = "/auth/logout";

/// JSON view of the logged-in user
pub const ME: &str = "/auth/me";

pub const STATIC: &str = "/static";
