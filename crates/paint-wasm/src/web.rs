//! Browser host: `paint-core` host traits over `web-sys`.

use paint_core::host::{Context2d, Document, DrawingSurface};
use paint_core::{Color, ContextError, ContextKind, FillRect, LookupError};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// The page's `document`, resolving ids to `<canvas>` elements.
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The document of the current window, if running in a page.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }
}

impl Document for WebDocument {
    type Surface<'a> = WebCanvas;

    fn surface(&mut self, id: &str) -> Result<WebCanvas, LookupError> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| LookupError::NotFound { id: id.to_string() })?;

        element
            .dyn_into::<HtmlCanvasElement>()
            .map(WebCanvas)
            .map_err(|element| LookupError::NotASurface {
                id: id.to_string(),
                tag: element.tag_name().to_ascii_lowercase(),
            })
    }
}

/// A `<canvas>` element.
pub struct WebCanvas(pub HtmlCanvasElement);

impl DrawingSurface for WebCanvas {
    type Context<'a> = WebContext;

    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }

    fn set_width(&mut self, width: u32) {
        self.0.set_width(width);
    }

    fn set_height(&mut self, height: u32) {
        self.0.set_height(height);
    }

    fn context_2d(&mut self) -> Result<WebContext, ContextError> {
        let unavailable = ContextError::Unavailable {
            requested: ContextKind::TwoD,
        };
        // `getContext` yields null when the canvas already holds another kind.
        match self.0.get_context(ContextKind::TwoD.as_str()) {
            Ok(Some(object)) => object
                .dyn_into::<CanvasRenderingContext2d>()
                .map(WebContext)
                .map_err(|_| unavailable),
            Ok(None) | Err(_) => Err(unavailable),
        }
    }
}

/// A `CanvasRenderingContext2d`.
pub struct WebContext(pub CanvasRenderingContext2d);

impl Context2d for WebContext {
    fn set_fill_color(&mut self, color: &Color) {
        self.0.set_fill_style_str(&color.to_css());
    }

    fn fill_rect(&mut self, rect: &FillRect) {
        self.0.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }
}
