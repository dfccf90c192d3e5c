//! Navigation routes
//!
//! Routes have a path form (`/`, `/build/{model_id}`) so a start location can
//! be given on the command line. A builder route is accepted for any model id;
//! resolving the id happens when the page is mounted.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const BUILD_PREFIX: &str = "/build/";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    UnknownPath(String),

    #[error("Missing model id in route: {0}")]
    MissingModelId(String),
}

/// A navigation destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Model catalog
    Catalog,

    /// Prompt builder for a model id
    Builder(String),
}

impl Route {
    pub fn builder(model_id: impl Into<String>) -> Self {
        Route::Builder(model_id.into())
    }

    /// Path form of the route
    pub fn path(&self) -> String {
        match self {
            Route::Catalog => "/".to_string(),
            Route::Builder(id) => format!("{}{}", BUILD_PREFIX, id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Ok(Route::Catalog);
        }

        let Some(rest) = path.strip_prefix(BUILD_PREFIX) else {
            return Err(RouteError::UnknownPath(path.to_string()));
        };

        let id = rest.trim_end_matches('/');
        if id.is_empty() {
            return Err(RouteError::MissingModelId(path.to_string()));
        }
        if id.contains('/') {
            return Err(RouteError::UnknownPath(path.to_string()));
        }

        Ok(Route::Builder(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Catalog);
        assert_eq!("".parse::<Route>().unwrap(), Route::Catalog);
    }

    #[test]
    fn test_parse_builder() {
        assert_eq!(
            "/build/shisa-v2".parse::<Route>().unwrap(),
            Route::builder("shisa-v2")
        );
        assert_eq!(
            "/build/nemotron-49b/".parse::<Route>().unwrap(),
            Route::builder("nemotron-49b")
        );
        // Unknown ids still route to the builder, which shows not-found
        assert_eq!(
            "/build/unknown".parse::<Route>().unwrap(),
            Route::builder("unknown")
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "/select".parse::<Route>(),
            Err(RouteError::UnknownPath("/select".to_string()))
        );
        assert_eq!(
            "/build/".parse::<Route>(),
            Err(RouteError::MissingModelId("/build/".to_string()))
        );
        assert!("/build/a/b".parse::<Route>().is_err());
    }

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Catalog, Route::builder("llama4-maverick")] {
            assert_eq!(route.path().parse::<Route>().unwrap(), route);
        }
        assert_eq!(Route::builder("shisa-v2").to_string(), "/build/shisa-v2");
    }
}
