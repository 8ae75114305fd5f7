//! Symbolic route resolution for data-source URLs

use indexmap::IndexMap;

use crate::error::BindError;

/// Routing collaborator: produces a concrete path for a named route.
pub trait RouteResolver: Send + Sync {
    /// Resolve `route` with the merged parameter set against the current
    /// request, or `None` when the route cannot be resolved.
    fn resolve_path(
        &self,
        route: &str,
        values: &IndexMap<String, String>,
        request: &RequestContext,
    ) -> Option<String>;
}

/// Routing context of the active request.
///
/// Passed explicitly into resolution. Outside request processing (design
/// time, background work) there is no context and no URL is produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Route values of the request currently being processed, used to
    /// fill placeholders the column configuration does not supply.
    pub ambient_values: IndexMap<String, String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ambient route value.
    pub fn with_ambient_value(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.ambient_values.insert(key.into(), value.into());
        self
    }
}

/// Symbolic route configuration for a column's data-source URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteBinding {
    /// Route name; an empty name means no data source is configured.
    pub name: String,
    /// Base route values, overridden on conflict.
    pub base: IndexMap<String, String>,
    /// Route values that take precedence over base values.
    pub overrides: IndexMap<String, String>,
}

impl RouteBinding {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: IndexMap::new(),
            overrides: IndexMap::new(),
        }
    }
}

/// Merge route values: every key of `overrides` wins; keys present only
/// in `base` are carried through unchanged. Ordering is deterministic:
/// base keys keep their positions, override-only keys follow in override
/// order.
pub fn merge_route_values(
    base: &IndexMap<String, String>,
    overrides: &IndexMap<String, String>,
) -> IndexMap<String, String> {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Resolve the data-source URL for a column element.
///
/// `element_values` are the variant's additional route values; they merge
/// over the binding's base values, and the binding's overrides win over
/// both. Yields `Ok(None)` when no route name is configured or no request
/// scope is active; both are valid unbound states. Fails only when a
/// named route cannot be resolved inside an active scope.
///
/// No caching is performed: repeated calls against unchanged inputs and
/// unchanged route state return the same path.
pub fn resolve_data_url(
    resolver: &dyn RouteResolver,
    request: Option<&RequestContext>,
    route: &RouteBinding,
    element_values: Option<&IndexMap<String, String>>,
) -> Result<Option<String>, BindError> {
    if route.name.is_empty() {
        return Ok(None);
    }

    let Some(request) = request else {
        tracing::debug!("no active request scope, skipping data url for route {}", route.name);
        return Ok(None);
    };

    let base = match element_values {
        Some(values) => merge_route_values(&route.base, values),
        None => route.base.clone(),
    };
    let merged = merge_route_values(&base, &route.overrides);

    resolver
        .resolve_path(&route.name, &merged, request)
        .map(Some)
        .ok_or_else(|| BindError::RouteResolution {
            route: route.name.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Echoes the route name and merged values into a fake path.
    struct EchoResolver;

    impl RouteResolver for EchoResolver {
        fn resolve_path(
            &self,
            route: &str,
            values: &IndexMap<String, String>,
            _request: &RequestContext,
        ) -> Option<String> {
            let mut path = format!("/{route}");
            for (key, value) in values {
                path.push_str(&format!("/{key}={value}"));
            }
            Some(path)
        }
    }

    /// Knows no routes at all.
    struct EmptyResolver;

    impl RouteResolver for EmptyResolver {
        fn resolve_path(
            &self,
            _route: &str,
            _values: &IndexMap<String, String>,
            _request: &RequestContext,
        ) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_merge_override_wins_and_base_keys_carry_through() {
        let base = map(&[("a", "1"), ("b", "2")]);
        let overrides = map(&[("b", "9"), ("c", "3")]);

        let merged = merge_route_values(&base, &overrides);

        assert_eq!(merged, map(&[("a", "1"), ("b", "9"), ("c", "3")]));
    }

    #[test]
    fn test_merge_ordering_is_deterministic() {
        let base = map(&[("a", "1"), ("b", "2")]);
        let overrides = map(&[("c", "3"), ("b", "9")]);

        let merged = merge_route_values(&base, &overrides);
        let keys: Vec<&str> = merged
            .keys()
            .map(String::as_str)
            .collect();

        // base positions kept, override-only keys appended in override order
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_route_name_yields_no_url() {
        let route = RouteBinding::default();
        let request = RequestContext::new();

        let url = resolve_data_url(&EchoResolver, Some(&request), &route, None).unwrap();
        assert_eq!(url, None);
    }

    #[test]
    fn test_no_request_scope_yields_no_url() {
        let route = RouteBinding::new("lookup_values");

        let url = resolve_data_url(&EchoResolver, None, &route, None).unwrap();
        assert_eq!(url, None);
    }

    #[test]
    fn test_unresolvable_route_is_an_error() {
        let route = RouteBinding::new("lookup_values");
        let request = RequestContext::new();

        let err = resolve_data_url(&EmptyResolver, Some(&request), &route, None).unwrap_err();
        assert_eq!(
            err,
            BindError::RouteResolution {
                route: "lookup_values".to_string()
            }
        );
    }

    #[test]
    fn test_element_values_merge_between_base_and_overrides() {
        let mut route = RouteBinding::new("lookup_values");
        route.base = map(&[("kind", "base"), ("page", "1")]);
        route.overrides = map(&[("kind", "final")]);
        let element_values = map(&[("kind", "element"), ("size", "20")]);
        let request = RequestContext::new();

        let url = resolve_data_url(&EchoResolver, Some(&request), &route, Some(&element_values))
            .unwrap()
            .unwrap();

        // overrides beat element values, element values beat base
        assert_eq!(url, "/lookup_values/kind=final/page=1/size=20");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut route = RouteBinding::new("lookup_values");
        route.overrides = map(&[("kind", "currency")]);
        let request = RequestContext::new();

        let first = resolve_data_url(&EchoResolver, Some(&request), &route, None).unwrap();
        let second = resolve_data_url(&EchoResolver, Some(&request), &route, None).unwrap();

        assert_eq!(first, second);
    }
}
