//! Pattern-based route table
//!
//! Default [`RouteResolver`] implementation. Routes are registered as
//! `/api/lookups/{kind}` style patterns. Placeholders are filled from the
//! supplied route values first and the request's ambient values second;
//! values that do not match a placeholder are appended as a url-encoded
//! query string. A placeholder that neither source can fill makes the
//! route unresolvable.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::routing::{RequestContext, RouteResolver};

/// Named route patterns.
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Register a route pattern under a name.
    pub fn register(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        self.routes.insert(name.into(), pattern.into());
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteResolver for RouteTable {
    fn resolve_path(
        &self,
        route: &str,
        values: &IndexMap<String, String>,
        request: &RequestContext,
    ) -> Option<String> {
        let pattern = self.routes.get(route)?;

        let mut path = String::with_capacity(pattern.len());
        let mut consumed: Vec<&str> = Vec::new();
        let mut rest = pattern.as_str();

        while let Some(start) = rest.find('{') {
            path.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}')?;
            let name = &after[..end];

            if let Some((key, value)) = values.get_key_value(name) {
                path.push_str(&urlencoding::encode(value));
                consumed.push(key.as_str());
            } else if let Some(value) = request.ambient_values.get(name) {
                path.push_str(&urlencoding::encode(value));
            } else {
                return None;
            }

            rest = &after[end + 1..];
        }
        path.push_str(rest);

        // leftover values become the query string
        let mut separator = '?';
        for (key, value) in values {
            if consumed.contains(&key.as_str()) {
                continue;
            }
            path.push(separator);
            path.push_str(&urlencoding::encode(key));
            path.push('=');
            path.push_str(&urlencoding::encode(value));
            separator = '&';
        }

        Some(path)
    }
}
