//! Page registry: which paths exist and which require a login.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";
pub const INVENTORY_PATH: &str = "/inventory";
pub const SCAN_PATH: &str = "/scan";
pub const RECIPES_PATH: &str = "/recipes";
pub const SETTINGS_PATH: &str = "/settings";

/// Static description of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

impl RouteDescriptor {
    #[must_use]
    pub const fn public(path: &'static str, name: &'static str) -> Self {
        Self { path, name, requires_auth: false }
    }

    #[must_use]
    pub const fn protected(path: &'static str, name: &'static str) -> Self {
        Self { path, name, requires_auth: true }
    }
}

/// Result of looking a path up in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    Page(&'a RouteDescriptor),
    /// No registered page; the not-found page renders for this path.
    NotFound(&'a str),
}

impl RouteMatch<'_> {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Page(route) => route.path,
            Self::NotFound(path) => path,
        }
    }

    /// Unregistered paths never require a login.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Page(route) if route.requires_auth)
    }
}

const APP_ROUTES: [RouteDescriptor; 8] = [
    RouteDescriptor::public(LOGIN_PATH, "Login"),
    RouteDescriptor::public(REGISTER_PATH, "Register"),
    RouteDescriptor::public(FORGOT_PASSWORD_PATH, "ForgotPassword"),
    RouteDescriptor::protected(INVENTORY_PATH, "Inventory"),
    RouteDescriptor::protected(SCAN_PATH, "Scan"),
    RouteDescriptor::protected(RECIPES_PATH, "Recipes"),
    RouteDescriptor::protected(SETTINGS_PATH, "Settings"),
    // Redirect-only; the guard never lets it render.
    RouteDescriptor::public(ROOT_PATH, "Root"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRegistry {
    routes: Vec<RouteDescriptor>,
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new(APP_ROUTES.to_vec())
    }
}

impl RouteRegistry {
    #[must_use]
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Match a raw navigation path (query and fragment allowed).
    #[must_use]
    pub fn resolve<'a>(&'a self, path: &'a str) -> RouteMatch<'a> {
        let path = normalize_path(path);
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map_or(RouteMatch::NotFound(path), RouteMatch::Page)
    }
}

/// Strip query string, fragment and a trailing slash. Empty input is `/`.
#[must_use]
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = raw[..end].trim_end_matches('/');
    if path.is_empty() { ROOT_PATH } else { path }
}
