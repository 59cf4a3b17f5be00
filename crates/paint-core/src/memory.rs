//! Software host: an in-memory document of canvases backed by RGBA8 bitmaps.
//!
//! Mirrors the browser canvas semantics the painter relies on: default
//! size 300×150, resize clears the bitmap and resets context state, a
//! canvas binds to one context kind for its whole life, and fills cover
//! the pixels whose centres fall inside the rectangle.

use crate::error::{ContextError, ContextKind, LookupError};
use crate::host::{Context2d, Document, DrawingSurface};
use crate::model::{Color, Dimensions, FillRect};
use std::collections::HashMap;

const CLEAR: [u8; 4] = [0, 0, 0, 0];

/// Default canvas size when no width/height attributes are set.
pub const DEFAULT_CANVAS_SIZE: Dimensions = Dimensions::new(300, 150);

// ─── Canvas ──────────────────────────────────────────────────────────────

/// Mutable state of the 2D context. Reset on every resize.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ContextState {
    fill: Color,
}

impl Default for ContextState {
    fn default() -> Self {
        Self { fill: Color::BLACK }
    }
}

#[derive(Debug, Clone)]
pub struct MemoryCanvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    bound: Option<ContextKind>,
    state: ContextState,
}

impl MemoryCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![CLEAR; Dimensions::new(width, height).area()],
            bound: None,
            state: ContextState::default(),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Context kind this canvas is bound to, if any.
    pub fn bound_context(&self) -> Option<ContextKind> {
        self.bound
    }

    /// Bind the canvas to a context kind, as a call to `getContext` would.
    ///
    /// # Errors
    /// `ContextError::Incompatible` if already bound to a different kind.
    pub fn bind_context(&mut self, kind: ContextKind) -> Result<(), ContextError> {
        match self.bound {
            None => {
                self.bound = Some(kind);
                Ok(())
            }
            Some(bound) if bound == kind => Ok(()),
            Some(bound) => Err(ContextError::Incompatible {
                requested: kind,
                bound,
            }),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            self.pixels.get(y as usize * self.width as usize + x as usize).copied()
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// True when every pixel equals `color` at 8-bit precision.
    pub fn is_filled_with(&self, color: &Color) -> bool {
        let target = color.to_rgba8();
        self.pixels.iter().all(|p| *p == target)
    }

    /// Current fill color of the 2D context state.
    pub fn fill_color(&self) -> Color {
        self.state.fill
    }

    fn reset(&mut self) {
        self.pixels = vec![CLEAR; self.dimensions().area()];
        self.state = ContextState::default();
    }

    /// Column or row span `[start, end)` whose pixel centres lie in
    /// `[origin, origin + extent)`, clipped to `0..limit`.
    fn span(origin: f64, extent: f64, limit: u32) -> (usize, usize) {
        let limit = limit as f64;
        let start = (origin - 0.5).ceil().clamp(0.0, limit);
        let end = (origin + extent - 0.5).ceil().clamp(0.0, limit);
        (start as usize, end as usize)
    }

    fn fill(&mut self, rect: &FillRect) {
        if !rect.is_finite() {
            log::trace!("ignoring non-finite fill {rect:?}");
            return;
        }
        let rect = rect.normalized();
        let (x0, x1) = Self::span(rect.x, rect.width, self.width);
        let (y0, y1) = Self::span(rect.y, rect.height, self.height);
        let src = self.state.fill;
        let opaque = src.is_opaque();
        let src8 = src.to_rgba8();
        let stride = self.width as usize;

        for y in y0..y1 {
            for px in &mut self.pixels[y * stride + x0..y * stride + x1] {
                *px = if opaque { src8 } else { blend_over(&src, *px) };
            }
        }
    }
}

impl Default for MemoryCanvas {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_SIZE.width, DEFAULT_CANVAS_SIZE.height)
    }
}

/// Source-over compositing of `src` onto an 8-bit straight-alpha pixel.
fn blend_over(src: &Color, dst: [u8; 4]) -> [u8; 4] {
    let d = Color::from_rgba8(dst);
    let sa = src.a.clamp(0.0, 1.0);
    let out_a = sa + d.a * (1.0 - sa);
    if out_a <= 0.0 {
        return CLEAR;
    }
    let mix = |s: f32, d_c: f32| (s * sa + d_c * d.a * (1.0 - sa)) / out_a;
    Color::rgba(mix(src.r, d.r), mix(src.g, d.g), mix(src.b, d.b), out_a).to_rgba8()
}

impl DrawingSurface for MemoryCanvas {
    type Context<'a> = MemoryContext<'a>;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
        self.reset();
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
        self.reset();
    }

    fn context_2d(&mut self) -> Result<MemoryContext<'_>, ContextError> {
        self.bind_context(ContextKind::TwoD)?;
        Ok(MemoryContext { canvas: self })
    }
}

/// 2D context borrowed from a `MemoryCanvas`.
pub struct MemoryContext<'a> {
    canvas: &'a mut MemoryCanvas,
}

impl Context2d for MemoryContext<'_> {
    fn set_fill_color(&mut self, color: &Color) {
        self.canvas.state.fill = *color;
    }

    fn fill_rect(&mut self, rect: &FillRect) {
        self.canvas.fill(rect);
    }
}

// ─── Document ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Element {
    Canvas(MemoryCanvas),
    /// Any non-canvas element, identified by its tag name.
    Other { tag: String },
}

/// Id → element map standing in for a host document.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, Element>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `insert_canvas`.
    pub fn with_canvas(mut self, id: &str, canvas: MemoryCanvas) -> Self {
        self.insert_canvas(id, canvas);
        self
    }

    pub fn insert_canvas(&mut self, id: &str, canvas: MemoryCanvas) {
        self.elements.insert(id.to_string(), Element::Canvas(canvas));
    }

    pub fn insert_element(&mut self, id: &str, tag: &str) {
        self.elements.insert(
            id.to_string(),
            Element::Other {
                tag: tag.to_ascii_lowercase(),
            },
        );
    }

    pub fn canvas(&self, id: &str) -> Option<&MemoryCanvas> {
        match self.elements.get(id) {
            Some(Element::Canvas(canvas)) => Some(canvas),
            _ => None,
        }
    }

    pub fn canvas_mut(&mut self, id: &str) -> Option<&mut MemoryCanvas> {
        match self.elements.get_mut(id) {
            Some(Element::Canvas(canvas)) => Some(canvas),
            _ => None,
        }
    }
}

impl Document for MemoryDocument {
    type Surface<'a> = &'a mut MemoryCanvas;

    fn surface(&mut self, id: &str) -> Result<&mut MemoryCanvas, LookupError> {
        match self.elements.get_mut(id) {
            Some(Element::Canvas(canvas)) => Ok(canvas),
            Some(Element::Other { tag }) => Err(LookupError::NotASurface {
                id: id.to_string(),
                tag: tag.clone(),
            }),
            None => Err(LookupError::NotFound { id: id.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_canvas_is_transparent_at_default_size() {
        let canvas = MemoryCanvas::default();
        assert_eq!(canvas.dimensions(), Dimensions::new(300, 150));
        assert!(canvas.is_filled_with(&Color::TRANSPARENT));
        assert_eq!(canvas.bound_context(), None);
    }

    #[test]
    fn resize_clears_and_resets_fill_style() {
        let mut canvas = MemoryCanvas::new(4, 4);
        {
            let mut ctx = canvas.context_2d().unwrap();
            ctx.set_fill_color(&Color::RED);
            ctx.fill_rect(&FillRect::new(0.0, 0.0, 4.0, 4.0));
        }
        assert!(canvas.is_filled_with(&Color::RED));

        // Same value still clears.
        canvas.set_width(4);
        assert!(canvas.is_filled_with(&Color::TRANSPARENT));
        assert_eq!(canvas.fill_color(), Color::BLACK);
        assert_eq!(canvas.bound_context(), Some(ContextKind::TwoD));
    }

    #[test]
    fn fill_covers_pixel_centres_only() {
        let mut canvas = MemoryCanvas::new(4, 4);
        let mut ctx = canvas.context_2d().unwrap();
        ctx.set_fill_color(&Color::RED);
        ctx.fill_rect(&FillRect::new(1.0, 1.0, 1.4, 2.6));

        let red = Color::RED.to_rgba8();
        assert_eq!(canvas.pixel(1, 1), Some(red));
        assert_eq!(canvas.pixel(1, 3), Some(red));
        assert_eq!(canvas.pixel(2, 1), Some(CLEAR));
        assert_eq!(canvas.pixel(0, 0), Some(CLEAR));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn fill_clips_to_bitmap() {
        let mut canvas = MemoryCanvas::new(3, 3);
        let mut ctx = canvas.context_2d().unwrap();
        ctx.set_fill_color(&Color::RED);
        ctx.fill_rect(&FillRect::new(-10.0, -10.0, 100.0, 100.0));
        assert!(canvas.is_filled_with(&Color::RED));
    }

    #[test]
    fn non_finite_fill_is_ignored() {
        let mut canvas = MemoryCanvas::new(2, 2);
        let mut ctx = canvas.context_2d().unwrap();
        ctx.fill_rect(&FillRect::new(0.0, 0.0, f64::INFINITY, 2.0));
        assert!(canvas.is_filled_with(&Color::TRANSPARENT));
    }

    #[test]
    fn translucent_fill_blends_over() {
        let mut canvas = MemoryCanvas::new(1, 1);
        let mut ctx = canvas.context_2d().unwrap();
        ctx.set_fill_color(&Color::RED);
        ctx.fill_rect(&FillRect::new(0.0, 0.0, 1.0, 1.0));
        ctx.set_fill_color(&Color::rgba(0.0, 0.0, 1.0, 0.5));
        ctx.fill_rect(&FillRect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(canvas.pixel(0, 0), Some([128, 0, 128, 255]));
    }

    #[test]
    fn webgl_binding_blocks_2d() {
        let mut canvas = MemoryCanvas::new(2, 2);
        canvas.bind_context(ContextKind::WebGl).unwrap();
        let err = canvas.context_2d().err().unwrap();
        assert_eq!(
            err,
            ContextError::Incompatible {
                requested: ContextKind::TwoD,
                bound: ContextKind::WebGl,
            }
        );
    }

    #[test]
    fn document_lookup_distinguishes_missing_and_wrong_kind() {
        let mut doc = MemoryDocument::new().with_canvas("canv", MemoryCanvas::default());
        doc.insert_element("title", "H1");

        assert!(doc.surface("canv").is_ok());
        assert_eq!(
            doc.surface("nope").err(),
            Some(LookupError::NotFound { id: "nope".into() })
        );
        assert_eq!(
            doc.surface("title").err(),
            Some(LookupError::NotASurface {
                id: "title".into(),
                tag: "h1".into(),
            })
        );
    }
}
