//! Identifier management using string interning for efficient string storage and comparison
//!
//! This module provides the [`Id`] type used to address rendered scene nodes.
//! Node identifiers follow the `{kind-prefix}-{element.id}` scheme, built
//! with [`Id::namespaced`].

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    f(&mut interner)
}

/// Efficient identifier type using string interning
///
/// Identifiers are `Copy` and compare by symbol, which keeps node lookups in
/// a rendered scene cheap.
///
/// # Examples
///
/// ```
/// use gitlook_core::identifier::Id;
///
/// let step = Id::new("step1");
/// let node = Id::namespaced("circle", "step1");
/// assert_eq!(node, "circle-step1");
/// assert_ne!(step, node);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Creates the identifier `{prefix}-{local}`.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The namespace, typically a scene kind's node prefix.
    /// * `local` - The element identifier inside that namespace.
    pub fn namespaced(prefix: &str, local: &str) -> Self {
        Self::new(&format!("{prefix}-{local}"))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
                .to_string()
        });
        write!(f, "{value}")
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
                == other
        })
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_id_interning_is_stable() {
        assert_eq!(Id::new("stage3"), Id::new("stage3"));
        assert_ne!(Id::new("stage3"), Id::new("stage4"));
    }

    #[test]
    fn test_namespaced_display() {
        let id = Id::namespaced("area", "working");
        assert_eq!(id.to_string(), "area-working");
        assert!(id == "area-working");
    }

    proptest! {
        #[test]
        fn namespaced_is_injective_for_a_fixed_prefix(
            a in "[a-z0-9_]{1,12}",
            b in "[a-z0-9_]{1,12}",
        ) {
            let left = Id::namespaced("commit", &a);
            let right = Id::namespaced("commit", &b);
            prop_assert_eq!(a == b, left == right);
        }
    }
}
