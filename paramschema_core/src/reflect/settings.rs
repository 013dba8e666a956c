use serde::Deserialize;

/// Knobs controlling a [`Reflector`](super::Reflector).
///
/// Deserializable so it can live next to the rest of an application's config:
///
/// ```
/// use paramschema_core::Settings;
///
/// let settings: Settings = serde_json::from_str(r#"{ "max_depth": 8 }"#).unwrap();
/// assert_eq!(settings.max_depth, 8);
/// assert!(settings.detect_cycles);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Deepest nesting of types accepted before giving up.
    pub max_depth: usize,
    /// Fail with a cycle error when a record type contains itself.
    pub detect_cycles: bool,
}

impl Settings {
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_cycles = enabled;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            detect_cycles: true,
        }
    }
}
