//! Software rendering backend on top of tiny-skia.
//!
//! Lets a host (or a test) rasterize a widget without a window, and dump the
//! result as PNG.

use std::path::Path;

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::error::{RenderError, Result};
use crate::rect::Rect;
use crate::renderer::{Color, Surface};

/// A `Surface` that rasterizes into an in-memory RGBA pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// Allocate a transparent pixmap of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::InvalidSize { width, height })?;
        log::debug!("Created {}x{} pixmap surface", width, height);
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Unpremultiplied RGBA of one pixel, or `None` outside the pixmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Encode the current contents as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::Encode(e.to_string()))
    }

    /// Encode as PNG and write to `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = self.encode_png()?;
        std::fs::write(path.as_ref(), data)?;
        log::info!("Wrote {}", path.as_ref().display());
        Ok(())
    }

    fn paint(color: Color) -> Paint<'static> {
        let [r, g, b, a] = color.to_rgba8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }

    fn skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
        if rect.is_empty() {
            return None;
        }
        tiny_skia::Rect::from_xywh(
            rect.left as f32,
            rect.top as f32,
            rect.width as f32,
            rect.height as f32,
        )
    }
}

impl Surface for PixmapSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(area) = Self::skia_rect(rect) else {
            return;
        };
        let mut paint = Self::paint(color);
        // Axis-aligned fills stay crisp
        paint.anti_alias = false;
        self.pixmap.fill_rect(area, &paint, Transform::identity(), None);
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        let Some(path) = Self::skia_rect(rect).and_then(PathBuilder::from_oval) else {
            return;
        };
        let paint = Self::paint(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}
