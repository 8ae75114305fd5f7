//! Value provider registry
//!
//! Central registry that maps a provider identifier to a zero-argument
//! constructor. Resolution constructs a fresh provider instance and
//! invokes the named method on it. Results are never cached, so two
//! resolutions may return different data when the provider's output is
//! time- or state-dependent; a memoizing wrapper can be layered on top
//! without changing this contract.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::ProviderError;

/// External component supplying ordered value:label pairs for a
/// select-style element.
///
/// The mapping order is decided by the provider and preserved all the way
/// to the rendered option list.
pub trait ValueProvider {
    /// Produce the mapping for the named zero-argument method, or `None`
    /// when the provider does not expose it.
    fn values(&self, method: &str) -> Option<IndexMap<String, String>>;
}

/// Zero-argument provider constructor.
pub type ProviderCtor = fn() -> Box<dyn ValueProvider>;

/// Central registry: maps a provider identifier to its constructor.
pub struct ValueProviderRegistry {
    ctors: HashMap<String, ProviderCtor>,
}

impl ValueProviderRegistry {
    pub fn new() -> Self {
        Self {
            ctors: HashMap::new(),
        }
    }

    /// Register a provider constructor under an identifier.
    pub fn register(&mut self, provider: impl Into<String>, ctor: ProviderCtor) {
        self.ctors.insert(provider.into(), ctor);
    }

    /// Check if a provider identifier is registered.
    pub fn contains(&self, provider: &str) -> bool {
        self.ctors.contains_key(provider)
    }

    /// Resolve the mapping for `(provider, method)`.
    ///
    /// Constructs a fresh provider instance on every call and re-invokes
    /// the method; nothing is memoized.
    pub fn resolve(
        &self,
        provider: &str,
        method: &str,
    ) -> Result<IndexMap<String, String>, ProviderError> {
        let ctor = self
            .ctors
            .get(provider)
            .ok_or_else(|| ProviderError::UnknownProvider {
                provider: provider.to_string(),
            })?;

        ctor()
            .values(method)
            .ok_or_else(|| ProviderError::UnknownMethod {
                provider: provider.to_string(),
                method: method.to_string(),
            })
    }
}

impl Default for ValueProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

    struct CountryProvider;

    impl CountryProvider {
        fn create() -> Box<dyn ValueProvider> {
            CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
            Box::new(Self)
        }
    }

    impl ValueProvider for CountryProvider {
        fn values(&self, method: &str) -> Option<IndexMap<String, String>> {
            match method {
                "shipping_countries" => {
                    let mut mapping = IndexMap::new();
                    mapping.insert("pl".to_string(), "Poland".to_string());
                    mapping.insert("de".to_string(), "Germany".to_string());
                    mapping.insert("at".to_string(), "Austria".to_string());
                    Some(mapping)
                }
                _ => None,
            }
        }
    }

    fn registry() -> ValueProviderRegistry {
        let mut registry = ValueProviderRegistry::new();
        registry.register("countries", CountryProvider::create);
        registry
    }

    #[test]
    fn test_resolve_preserves_provider_order() {
        let mapping = registry()
            .resolve("countries", "shipping_countries")
            .unwrap();

        let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
        assert_eq!(keys, ["pl", "de", "at"]);
        assert_eq!(mapping["de"], "Germany");
    }

    #[test]
    fn test_unknown_provider() {
        let err = registry()
            .resolve("colours", "shipping_countries")
            .unwrap_err();

        assert_eq!(
            err,
            ProviderError::UnknownProvider {
                provider: "colours".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_method() {
        let err = registry().resolve("countries", "billing_countries").unwrap_err();

        assert_eq!(
            err,
            ProviderError::UnknownMethod {
                provider: "countries".to_string(),
                method: "billing_countries".to_string()
            }
        );
    }

    #[test]
    fn test_each_resolution_constructs_a_fresh_provider() {
        let registry = registry();
        let before = CONSTRUCTED.load(Ordering::SeqCst);

        registry.resolve("countries", "shipping_countries").unwrap();
        registry.resolve("countries", "shipping_countries").unwrap();

        assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), before + 2);
    }
}
