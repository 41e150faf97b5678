use reqwest::Url;

use crate::error::{OrchestratorError, Result};

/// Append `segments` to `base`, percent-encoding each one so ids containing
/// `/`, `?` or `#` stay inside their own path segment.
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base)
        .map_err(|e| OrchestratorError::InvalidConfig(format!("invalid base URL '{base}': {e}")))?;
    url.path_segments_mut()
        .map_err(|_| OrchestratorError::InvalidConfig(format!("base URL '{base}' cannot take a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
