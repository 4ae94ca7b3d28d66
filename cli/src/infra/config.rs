//! Layout loading from `LOGREPLAY_*` environment variables via `envy`.

use crate::domain::error::ConfigError;
use crate::domain::layout::Layout;

/// Prefix of every layout override variable.
pub const LAYOUT_PREFIX: &str = "LOGREPLAY_";

/// Load the layout from the process environment; unset fields use defaults.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLayout`] if an override cannot be parsed.
pub fn load_layout() -> Result<Layout, ConfigError> {
    envy::prefixed(LAYOUT_PREFIX)
        .from_env()
        .map_err(|e| ConfigError::InvalidLayout(e.to_string()))
}

/// Load the layout from explicit key/value pairs (same rules as `load_layout`).
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLayout`] if an override cannot be parsed.
pub fn layout_from_pairs<I>(pairs: I) -> Result<Layout, ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    envy::prefixed(LAYOUT_PREFIX)
        .from_iter(pairs)
        .map_err(|e| ConfigError::InvalidLayout(e.to_string()))
}
