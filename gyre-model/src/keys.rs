//! Strongly-typed scene keys.
//!
//! Using a typed key avoids brittle string matching and enables scoped
//! state per carousel instance.

use uuid::Uuid;

/// Unique key identifying a carousel scene within the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneKey {
    /// The primary front-page showcase carousel.
    Showcase,
    /// A secondary gallery instance, scoped by its own id.
    Gallery(Uuid),
    /// Ad-hoc scenes (dev panels, tests).
    Custom(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_distinct() {
        let a = SceneKey::Gallery(Uuid::new_v4());
        let b = SceneKey::Gallery(Uuid::new_v4());
        assert_ne!(a, b);
        assert_ne!(SceneKey::Showcase, SceneKey::Custom("showcase"));
    }
}
