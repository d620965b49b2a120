//! Coordinate mapping between screen pixels and image-percentage space.
//!
//! This is the only place pixel and percent values meet. The chain is:
//! screen → container-relative (minus container origin) → container-local
//! (undo [`ViewTransform`]) → image-relative (minus letterbox offset) → percent.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Point, ViewTransform};
use crate::consts::PCT_MAX;
use crate::geom::{PctPoint, PctRect};

/// Bounds of the canvas container in page (client) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Convert a page point into container-relative pixels.
    #[must_use]
    pub fn to_relative(&self, page: Point) -> Point {
        Point::new(page.x - self.left, page.y - self.top)
    }
}

/// Rendered bounds of the image inside its container, in container-local pixels.
///
/// The image is aspect-fit, so it may be letterboxed on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageGeometry {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl ImageGeometry {
    /// Aspect-fit an image of natural size into a container, centring the short axis.
    ///
    /// Any zero (or negative) dimension yields the unmeasured geometry.
    #[must_use]
    pub fn fit(natural_width: f64, natural_height: f64, container_width: f64, container_height: f64) -> Self {
        if natural_width <= 0.0 || natural_height <= 0.0 || container_width <= 0.0 || container_height <= 0.0 {
            return Self::default();
        }
        let image_aspect = natural_width / natural_height;
        let container_aspect = container_width / container_height;
        if image_aspect > container_aspect {
            let height = container_width / image_aspect;
            Self { width: container_width, height, x: 0.0, y: (container_height - height) / 2.0 }
        } else {
            let width = container_height * image_aspect;
            Self { width, height: container_height, x: (container_width - width) / 2.0, y: 0.0 }
        }
    }

    /// Whether the image has been laid out and mapping is possible.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// A pixel rectangle for absolutely positioning overlay elements.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Map a page-space pointer position to image percent, clamped to `[0, 100]`.
///
/// Returns `None` when the image is not measured yet; callers suppress the event.
#[must_use]
pub fn screen_to_image_percent(
    screen: Point,
    view: &ViewTransform,
    image: &ImageGeometry,
    container: &ContainerRect,
) -> Option<PctPoint> {
    if !image.is_measured() {
        return None;
    }
    let local = view.screen_to_local(container.to_relative(screen));
    let x = (local.x - image.x) / image.width * PCT_MAX;
    let y = (local.y - image.y) / image.height * PCT_MAX;
    Some(PctPoint::new(x.clamp(0.0, PCT_MAX), y.clamp(0.0, PCT_MAX)))
}

/// Map an image-percent point to container-relative screen pixels (`x` = left, `y` = top).
#[must_use]
pub fn image_percent_to_screen(p: PctPoint, view: &ViewTransform, image: &ImageGeometry) -> Option<Point> {
    if !image.is_measured() {
        return None;
    }
    let local = Point::new(
        p.x / PCT_MAX * image.width + image.x,
        p.y / PCT_MAX * image.height + image.y,
    );
    Some(view.local_to_screen(local))
}

/// Map an image-percent rectangle to container-relative screen pixels.
#[must_use]
pub fn image_percent_rect_to_screen(rect: &PctRect, view: &ViewTransform, image: &ImageGeometry) -> Option<ScreenRect> {
    let origin = image_percent_to_screen(PctPoint::new(rect.x, rect.y), view, image)?;
    Some(ScreenRect {
        left: origin.x,
        top: origin.y,
        width: rect.width / PCT_MAX * image.width * view.scale,
        height: rect.height / PCT_MAX * image.height * view.scale,
    })
}
