//! Checker configuration.

/// Default ceiling on hierarchy nesting.
///
/// Real hierarchies are a handful of levels deep. Hitting this usually means
/// the host's metadata is cyclic; legitimately deeper hierarchies need
/// [`MAX_DEPTH_ENV`] or [`CheckConfig::with_max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Environment variable overriding [`CheckConfig::max_depth`].
pub const MAX_DEPTH_ENV: &str = "SEAL_MAX_DEPTH";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CheckConfig {
    /// Maximum nesting of closed hierarchies before giving up with
    /// [`CheckError::DepthExceeded`](crate::CheckError::DepthExceeded).
    pub max_depth: usize,
    /// Attach a `help:` suggestion naming the arms to add or remove.
    pub suggest_missing_arms: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            suggest_missing_arms: true,
        }
    }
}

impl CheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with `SEAL_MAX_DEPTH` applied if set.
    pub fn from_env() -> Self {
        Self::default().with_max_depth_override(std::env::var(MAX_DEPTH_ENV).ok().as_deref())
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_suggestions(mut self, enabled: bool) -> Self {
        self.suggest_missing_arms = enabled;
        self
    }

    /// Apply a raw override value; unparsable or zero values are ignored.
    #[must_use]
    fn with_max_depth_override(self, raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return self;
        };
        match raw.trim().parse::<usize>() {
            Ok(depth) if depth > 0 => self.with_max_depth(depth),
            _ => {
                tracing::warn!(value = raw, "ignoring invalid {MAX_DEPTH_ENV}");
                self
            }
        }
    }
}
