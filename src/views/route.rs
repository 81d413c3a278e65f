//! Client-side routes.

use std::fmt;

/// Screens of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Phone number entry (the default route)
    #[default]
    Login,
    /// Year-in-review metrics for the logged-in customer
    Dashboard,
    /// Operator view: pick any customer and see their metrics
    Customers,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Dashboard => "/metrics",
            Route::Customers => "/customers",
        }
    }

    /// Resolve a path; anything unknown lands on login
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/metrics" => Route::Dashboard,
            "/customers" => Route::Customers,
            _ => Route::Login,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in [Route::Login, Route::Dashboard, Route::Customers] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_path_is_login() {
        assert_eq!(Route::from_path("/nope"), Route::Login);
        assert_eq!(Route::from_path("/metrics/"), Route::Dashboard);
        assert_eq!(Route::default(), Route::Login);
    }
}
