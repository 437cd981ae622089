use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why the field could not be attached to the page.
///
/// All of these are recoverable: the page simply renders without the
/// animation.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("container #{0} not found")]
    ContainerNotFound(String),
    #[error("#{0} is not an HTML element")]
    NotHtmlElement(String),
    #[error("could not create canvas: {0}")]
    Canvas(String),
    #[error("2D drawing context unavailable")]
    NoContext,
    #[error("could not listen for {kind}: {detail}")]
    Listener { kind: &'static str, detail: String },
}

/// Render a JS exception for an error message.
pub(crate) fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
