//! Once-only factorization cache.
//!
//! A projector owns exactly one [`FactorizationCache`]; the operator it is
//! derived from is immutable, so a populated cache stays valid for the
//! projector's entire lifetime. Population happens at most once and the
//! number of factorization runs is tracked so callers (and tests) can
//! verify that repeated projections reuse the cached factors.

use crate::error::ProxError;

/// Lazily populated, compute-once holder for a matrix factorization.
#[derive(Debug, Default)]
pub struct FactorizationCache<F> {
    factor: Option<F>,
    count: u64,
}

impl<F> FactorizationCache<F> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            factor: None,
            count: 0,
        }
    }

    /// Populate the cache if it is empty, then return the factorization.
    ///
    /// Idempotent: once populated, `build` is never invoked again. If
    /// `build` fails the cache stays empty and the error is propagated
    /// unchanged (a degenerate operator is reported, not recovered).
    pub fn ensure<B>(&mut self, build: B) -> Result<&F, ProxError>
    where
        B: FnOnce() -> Result<F, ProxError>,
    {
        if self.factor.is_none() {
            let factor = build()?;
            self.count += 1;
            self.factor = Some(factor);
        }
        self.factor.as_ref().ok_or(ProxError::FactorizationMissing)
    }

    /// Read-only access to the factorization, if populated.
    pub fn factor(&self) -> Option<&F> {
        self.factor.as_ref()
    }

    /// Whether the factorization has been computed.
    pub fn is_populated(&self) -> bool {
        self.factor.is_some()
    }

    /// How many times the factorization routine actually ran.
    pub fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_is_idempotent() {
        let mut cache: FactorizationCache<i32> = FactorizationCache::new();
        assert!(!cache.is_populated());

        for _ in 0..5 {
            let v = cache.ensure(|| Ok(42)).unwrap();
            assert_eq!(*v, 42);
        }

        assert!(cache.is_populated());
        assert_eq!(cache.count(), 1);
    }

    #[test]
    fn test_failed_build_leaves_cache_empty() {
        let mut cache: FactorizationCache<i32> = FactorizationCache::new();

        let err = cache
            .ensure(|| Err(ProxError::SingularOperator("test".into())))
            .unwrap_err();
        assert!(matches!(err, ProxError::SingularOperator(_)));
        assert!(!cache.is_populated());
        assert_eq!(cache.count(), 0);

        // A later successful build still populates it.
        cache.ensure(|| Ok(7)).unwrap();
        assert_eq!(cache.count(), 1);
    }
}
