//! Error type shared by the core logic and the browser bindings.
//!
//! None of these errors ever reach the page: the entry points log them and
//! carry on with the remaining behaviors.

use thiserror::Error;

/// Errors raised while wiring behaviors onto a page
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    /// No global `window` object (not running in a browser)
    #[error("window is not available")]
    NoWindow,

    /// The window has no document attached
    #[error("document is not available")]
    NoDocument,

    /// A required element was not found on the page
    #[error("element not found: {0}")]
    MissingElement(String),

    /// A DOM call threw
    #[error("javascript error: {0}")]
    Js(String),

    /// Options passed to an entry point could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;

/// Run one setup step, logging instead of propagating its failure.
///
/// Returns whether the step succeeded; steps run after a failed one are
/// unaffected.
pub fn isolated(name: &str, step: impl FnOnce() -> Result<()>) -> bool {
    match step() {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!("{} not initialized: {}", name, err);
            false
        }
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Config(err.to_string())
    }
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::JSON::stringify(&value)
                    .ok()
                    .and_then(|s| s.as_string())
            })
            .unwrap_or_else(|| "unknown error".to_string());
        SiteError::Js(message)
    }
}

#[cfg(feature = "browser")]
impl From<serde_wasm_bindgen::Error> for SiteError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        SiteError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(SiteError::NoWindow.to_string(), "window is not available");
        assert_eq!(
            SiteError::MissingElement(".navbar".into()).to_string(),
            "element not found: .navbar"
        );
    }

    #[test]
    fn test_json_error_maps_to_config() {
        let err: SiteError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn test_failed_step_does_not_stop_later_steps() {
        let mut fields_wired = false;
        let redirect = isolated("contact form redirect", || {
            Err(SiteError::Js("SecurityError: replaceState denied".into()))
        });
        let fields = isolated("contact form fields", || {
            fields_wired = true;
            Ok(())
        });
        assert!(!redirect);
        assert!(fields);
        assert!(fields_wired);
    }
}
