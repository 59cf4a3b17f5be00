pub mod config;
pub mod error;
pub mod host;
pub mod memory;
pub mod model;
pub mod paint;

pub use config::PaintConfig;
pub use error::{ColorParseError, ConfigError, ContextError, ContextKind, LookupError, PaintError};
pub use host::{Context2d, Document, DrawingSurface};
pub use memory::{MemoryCanvas, MemoryDocument};
pub use model::{Color, Dimensions, FillRect};
pub use paint::{paint, paint_surface, paint_with_config};
