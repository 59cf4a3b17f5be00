//! The canvas painter: size a surface and flood it with one color.

use crate::config::PaintConfig;
use crate::error::PaintError;
use crate::host::{Context2d, Document, DrawingSurface};
use crate::model::{Color, Dimensions};

/// Look up `surface_id` in `document`, resize it to `dimensions`, and fill
/// it entirely with `color`.
///
/// # Errors
/// `PaintError::Lookup` if the id does not name a drawing surface; the
/// document is left untouched. `PaintError::Context` if no 2D context is
/// available; the surface has been resized but nothing is filled.
pub fn paint<D: Document>(
    document: &mut D,
    surface_id: &str,
    dimensions: Dimensions,
    color: Color,
) -> Result<(), PaintError> {
    log::debug!("paint #{surface_id} {dimensions} {color}");

    let surface = document.surface(surface_id).inspect_err(|e| {
        log::warn!("paint #{surface_id}: {e}");
    })?;
    paint_surface(surface, dimensions, color).inspect_err(|e| {
        log::warn!("paint #{surface_id}: {e}");
    })
}

/// Resize an already-resolved surface and fill it with `color`.
///
/// # Errors
/// `PaintError::Context` if the surface has no 2D context to give.
pub fn paint_surface<S: DrawingSurface>(
    mut surface: S,
    dimensions: Dimensions,
    color: Color,
) -> Result<(), PaintError> {
    surface.set_width(dimensions.width);
    surface.set_height(dimensions.height);

    let mut ctx = surface.context_2d()?;
    ctx.set_fill_color(&color);

    let rect = dimensions.full_rect();
    log::trace!("fill_rect {rect:?} with {}", color.to_css());
    ctx.fill_rect(&rect);
    Ok(())
}

/// Run `paint` with the values of a loaded config.
///
/// # Errors
/// Same as `paint`.
pub fn paint_with_config<D: Document>(
    document: &mut D,
    config: &PaintConfig,
) -> Result<(), PaintError> {
    paint(document, &config.surface_id, config.dimensions(), config.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ContextError, ContextKind, LookupError};
    use crate::memory::{MemoryCanvas, MemoryDocument};
    use pretty_assertions::assert_eq;

    #[test]
    fn paints_default_canvas_red() {
        let mut doc = MemoryDocument::new().with_canvas("canv", MemoryCanvas::default());
        paint(&mut doc, "canv", Dimensions::DEFAULT, Color::RED).unwrap();

        let canvas = doc.canvas("canv").unwrap();
        assert_eq!(canvas.dimensions(), Dimensions::new(400, 400));
        assert!(canvas.is_filled_with(&Color::RED));
    }

    #[test]
    fn paint_surface_works_on_owned_canvas() {
        let mut canvas = MemoryCanvas::new(1, 1);
        paint_surface(&mut canvas, Dimensions::new(7, 3), Color::BLACK).unwrap();
        assert_eq!(canvas.dimensions(), Dimensions::new(7, 3));
        assert!(canvas.is_filled_with(&Color::BLACK));
    }

    #[test]
    fn lookup_error_propagates() {
        let mut doc = MemoryDocument::new();
        let err = paint(&mut doc, "canv", Dimensions::DEFAULT, Color::RED).unwrap_err();
        assert_eq!(
            err,
            PaintError::Lookup(LookupError::NotFound { id: "canv".into() })
        );
        assert_eq!(err.to_string(), "no element with id `canv`");
    }

    #[test]
    fn context_error_propagates_after_resize() {
        let mut canvas = MemoryCanvas::default();
        canvas.bind_context(ContextKind::WebGl).unwrap();
        let mut doc = MemoryDocument::new().with_canvas("canv", canvas);

        let err = paint(&mut doc, "canv", Dimensions::new(10, 20), Color::RED).unwrap_err();
        assert_eq!(
            err,
            PaintError::Context(ContextError::Incompatible {
                requested: ContextKind::TwoD,
                bound: ContextKind::WebGl,
            })
        );

        let canvas = doc.canvas("canv").unwrap();
        assert_eq!(canvas.dimensions(), Dimensions::new(10, 20));
        assert!(canvas.is_filled_with(&Color::TRANSPARENT));
    }

    #[test]
    fn config_drives_paint() {
        let mut doc = MemoryDocument::new().with_canvas("stage", MemoryCanvas::default());
        let config = PaintConfig::from_json(r#"{"surfaceId":"stage","width":5,"color":"blue"}"#)
            .unwrap();
        paint_with_config(&mut doc, &config).unwrap();

        let canvas = doc.canvas("stage").unwrap();
        assert_eq!(canvas.dimensions(), Dimensions::new(5, 400));
        assert!(canvas.is_filled_with(&Color::named("blue").unwrap()));
    }
}
