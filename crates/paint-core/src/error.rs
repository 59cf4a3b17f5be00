//! Error types for surface lookup, context acquisition, and painting.

use thiserror::Error;

/// The kind of drawing context a surface can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    TwoD,
    WebGl,
    WebGl2,
    BitmapRenderer,
}

impl ContextKind {
    /// Identifier the host uses for this kind in `getContext`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKind::TwoD => "2d",
            ContextKind::WebGl => "webgl",
            ContextKind::WebGl2 => "webgl2",
            ContextKind::BitmapRenderer => "bitmaprenderer",
        }
    }
}

impl std::fmt::Display for ContextKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The requested surface could not be resolved from the document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no element with id `{id}`")]
    NotFound { id: String },

    /// The id resolved, but to an element that cannot be drawn on.
    #[error("element `{id}` is a <{tag}>, not a drawing surface")]
    NotASurface { id: String, tag: String },
}

/// The surface could not provide the requested drawing context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("host returned no `{requested}` context")]
    Unavailable { requested: ContextKind },

    #[error("cannot get a `{requested}` context: surface is already bound to `{bound}`")]
    Incompatible {
        requested: ContextKind,
        bound: ContextKind,
    },
}

/// Text that is not a recognised color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color `{input}`")]
pub struct ColorParseError {
    pub input: String,
}

/// Failure of a paint operation. Both variants abort before any fill.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaintError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Context(#[from] ContextError),
}

/// A paint configuration could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid paint config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Color(#[from] ColorParseError),
}
