//! Stable short names for anonymous styles.
//!
//! Every [`Style`](crate::Style) owns a [`Location`], an opaque identity
//! handed out once at construction. The [`IdentityRegistry`] turns a location
//! into a short alphabetic name the first time it is asked, and returns the
//! same name for the rest of the process. Class selectors for styles without
//! an explicit name are built from it (`.A`, `.B`, ...).
//!
//! Names are a base-52 encoding (`A`-`Z`, `a`-`z`) of a counter that advances
//! on each first lookup, least significant digit first.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

const ALPHABET: &[u8; 52] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

static GLOBAL: Lazy<IdentityRegistry> = Lazy::new(IdentityRegistry::new);

/// An opaque object identity.
///
/// Two locations are equal only if one is a copy of the other; creating a new
/// location never yields an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location(u64);

impl Location {
    /// Allocates a fresh identity.
    pub fn new() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Location(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The name assigned by the process-wide registry.
    pub fn name(&self) -> String {
        IdentityRegistry::global().id_for(*self)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    names: HashMap<Location, String>,
    counter: usize,
}

/// Maps locations to stable, distinct names.
///
/// Lookup and counter advance happen under one lock, so concurrent first use
/// of the same location from several threads assigns exactly one name.
///
/// # Example
///
/// ```rust
/// use stylist::{IdentityRegistry, Location};
///
/// let registry = IdentityRegistry::new();
/// let (a, b) = (Location::new(), Location::new());
///
/// assert_eq!(registry.id_for(a), "A");
/// assert_eq!(registry.id_for(b), "B");
/// assert_eq!(registry.id_for(a), "A");
/// ```
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    state: Mutex<RegistryState>,
}

impl IdentityRegistry {
    /// Creates an empty registry whose counter starts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by the whole process.
    pub fn global() -> &'static IdentityRegistry {
        &GLOBAL
    }

    /// Returns the name for `location`, assigning the next one on first use.
    pub fn id_for(&self, location: Location) -> String {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(name) = state.names.get(&location) {
            return name.clone();
        }

        let name = encode(state.counter);
        state.counter += 1;
        state.names.insert(location, name.clone());
        tracing::trace!(?location, %name, "assigned style identity");
        name
    }

    /// Number of locations named so far.
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .names
            .len()
    }

    /// Returns true if no location has been named yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Encodes `id` in base 52, least significant digit first. Zero is `"A"`.
pub fn encode(mut id: usize) -> String {
    if id == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let base = ALPHABET.len();
    let mut name = String::new();
    while id != 0 {
        name.push(ALPHABET[id % base] as char);
        id /= base;
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_encode() {
        assert_eq!(encode(0), "A");
        assert_eq!(encode(1), "B");
        assert_eq!(encode(25), "Z");
        assert_eq!(encode(26), "a");
        assert_eq!(encode(51), "z");
        assert_eq!(encode(52), "AB");
        assert_eq!(encode(53), "BB");
        assert_eq!(encode(52 * 52), "AAB");
    }

    #[test]
    fn test_first_three_names() {
        let registry = IdentityRegistry::new();
        let names: Vec<String> = (0..3).map(|_| registry.id_for(Location::new())).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_idempotent() {
        let registry = IdentityRegistry::new();
        let location = Location::new();
        let first = registry.id_for(location);
        registry.id_for(Location::new());
        assert_eq!(registry.id_for(location), first);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_locations_are_distinct() {
        let a = Location::new();
        let b = Location::new();
        let copy = a;
        assert_ne!(a, b);
        assert_eq!(a, copy);
    }

    #[test]
    fn test_global_is_idempotent() {
        let location = Location::new();
        assert_eq!(location.name(), location.name());
    }

    #[test]
    fn test_concurrent_first_use() {
        let registry = Arc::new(IdentityRegistry::new());
        let locations: Arc<Vec<Location>> = Arc::new((0..200).map(|_| Location::new()).collect());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let locations = Arc::clone(&locations);
                thread::spawn(move || {
                    locations
                        .iter()
                        .map(|l| registry.id_for(*l))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results[1..] {
            assert_eq!(result, &results[0]);
        }
        let distinct: HashSet<&String> = results[0].iter().collect();
        assert_eq!(distinct.len(), 200);
        assert_eq!(registry.len(), 200);
    }
}
