//! Host environment boundary.
//!
//! A `Document` resolves ids to drawing surfaces, a `DrawingSurface`
//! exposes its pixel size and hands out drawing contexts, and a
//! `Context2d` issues fill commands. The browser implements these in
//! `paint-wasm`; `crate::memory` implements them in software.

use crate::error::{ContextError, LookupError};
use crate::model::{Color, FillRect};

/// Element lookup by id.
pub trait Document {
    type Surface<'a>: DrawingSurface
    where
        Self: 'a;

    /// Resolve `id` to a drawing surface.
    ///
    /// # Errors
    /// `LookupError::NotFound` when no element has this id,
    /// `LookupError::NotASurface` when the element cannot be drawn on.
    fn surface(&mut self, id: &str) -> Result<Self::Surface<'_>, LookupError>;
}

/// A resizable pixel surface.
pub trait DrawingSurface {
    type Context<'a>: Context2d
    where
        Self: 'a;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Resizing discards the current content.
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);

    /// Acquire the 2D context bound to this surface.
    ///
    /// # Errors
    /// `ContextError` when the host has none to give, typically because
    /// the surface is already bound to a different kind of context.
    fn context_2d(&mut self) -> Result<Self::Context<'_>, ContextError>;
}

/// Fill operations of a 2D drawing context.
pub trait Context2d {
    fn set_fill_color(&mut self, color: &Color);
    fn fill_rect(&mut self, rect: &FillRect);
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    type Context<'a>
        = S::Context<'a>
    where
        Self: 'a;

    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn set_width(&mut self, width: u32) {
        (**self).set_width(width);
    }

    fn set_height(&mut self, height: u32) {
        (**self).set_height(height);
    }

    fn context_2d(&mut self) -> Result<Self::Context<'_>, ContextError> {
        (**self).context_2d()
    }
}
