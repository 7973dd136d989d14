use egui::Rect;

use crate::document::Document;
use crate::element::Element;
use crate::error::{SurfaceError, SurfaceResult};
use crate::surface::{DrawingSurface, SurfaceFactory};

/// Replays a [`Document`] onto a drawing surface.
///
/// The surface is created on the first paint and kept until the device behind
/// it is lost, after which the next paint creates a fresh one.
pub struct Renderer<F: SurfaceFactory> {
    factory: F,
    surface: Option<F::Surface>,
    area: Rect,
}

impl<F: SurfaceFactory> Renderer<F> {
    pub fn new(factory: F, area: Rect) -> Self {
        Self {
            factory,
            surface: None,
            area,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn surface(&self) -> Option<&F::Surface> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut F::Surface> {
        self.surface.as_mut()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Match the surface to a new client area.
    ///
    /// Returns true when a surface exists and needs repainting. Stored geometry
    /// is in device-independent units and is never rescaled.
    pub fn resize(&mut self, area: Rect) -> bool {
        self.area = area;
        match &mut self.surface {
            Some(surface) => {
                surface.resize(area);
                true
            }
            None => false,
        }
    }

    /// Release the surface; the next paint recreates it
    pub fn discard_surface(&mut self) {
        if self.surface.take().is_some() {
            log::info!("Discarded drawing surface");
        }
    }

    /// Draw one frame: background first, then every element in id order.
    ///
    /// A creation failure aborts this frame only. A failed frame end discards
    /// the surface so the next paint starts over.
    pub fn paint(&mut self, document: &Document) -> SurfaceResult<()> {
        let result = {
            let surface = self.ensure_surface()?;
            surface.begin_frame();
            surface.clear(document.background());
            for (_, element) in document.iter_ordered() {
                element.draw(&mut *surface);
            }
            surface.end_frame()
        };

        if let Err(err) = &result {
            match err {
                SurfaceError::DeviceLost => log::warn!("Drawing surface lost, recreating on next paint"),
                other => log::error!("Frame failed: {}", other),
            }
            self.discard_surface();
        }
        result
    }

    fn ensure_surface(&mut self) -> SurfaceResult<&mut F::Surface> {
        if self.surface.is_none() {
            let surface = self.factory.create_surface(self.area).inspect_err(|err| {
                log::error!("{}", err);
            })?;
            log::info!("Created drawing surface for {:?}", self.area);
            self.surface = Some(surface);
        }
        self.surface
            .as_mut()
            .ok_or_else(|| SurfaceError::CreationFailed("surface missing after creation".to_string()))
    }
}
