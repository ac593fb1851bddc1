//! cache.rs - Process-wide cache of compiled matchers.
//!
//! Translating is cheap; building the engine is not. Callers that rebuild the
//! same extended pattern repeatedly (highlighters, per-line tools) can go
//! through `get_or_translate` to share one `Arc<CompiledMatcher>` per
//! `(pattern, flags)` pair.
//!
//! License: MIT OR APACHE 2.0

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock};

use lazy_static::lazy_static;
use log::debug;

use crate::errors::XRegexError;
use crate::matcher::CompiledMatcher;
use crate::translator::translate;

lazy_static! {
    /// Keyed by a hash of the extended pattern and the flags string.
    static ref MATCHER_CACHE: RwLock<HashMap<u64, Arc<CompiledMatcher>>> = RwLock::new(HashMap::new());
}

fn cache_key(pattern: &str, flags: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    pattern.hash(&mut hasher);
    flags.hash(&mut hasher);
    hasher.finish()
}

/// Returns the cached matcher for `(pattern, flags)`, translating and
/// compiling it on first use. Failures are returned and not cached.
pub fn get_or_translate(pattern: &str, flags: &str) -> Result<Arc<CompiledMatcher>, XRegexError> {
    let key = cache_key(pattern, flags);

    {
        let cache = MATCHER_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(matcher) = cache.get(&key) {
            debug!("Serving compiled matcher from cache for key: {}", key);
            return Ok(Arc::clone(matcher));
        }
    }

    debug!("Matcher not found in cache. Compiling now.");
    let matcher = Arc::new(translate(pattern, flags)?);

    let mut cache = MATCHER_CACHE.write().unwrap_or_else(PoisonError::into_inner);
    // Another thread may have won the race; keep whichever landed first.
    let cached = cache.entry(key).or_insert_with(|| Arc::clone(&matcher));
    Ok(Arc::clone(cached))
}

/// Number of matchers currently cached.
pub fn cached_len() -> usize {
    MATCHER_CACHE.read().unwrap_or_else(PoisonError::into_inner).len()
}

/// Drops every cached matcher.
pub fn clear_cache() {
    MATCHER_CACHE.write().unwrap_or_else(PoisonError::into_inner).clear();
    debug!("Matcher cache cleared.");
}
