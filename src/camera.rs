//! Pan/zoom view transform and the controller that owns it.
//!
//! `ViewTransform` maps container-local pixels to (container-relative) screen
//! pixels: `screen = local * scale + translate`. Every zoom operation keeps a
//! pivot pixel fixed on screen by solving for the new translation.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP_FACTOR};

/// A point in pixel space (screen or container-local).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Affine pan/zoom transform.
///
/// `scale` is a factor (1.0 = fit). `translate_x` / `translate_y` are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { scale: 1.0, translate_x: 0.0, translate_y: 0.0 }
    }
}

impl ViewTransform {
    /// Convert a container-local point to screen pixels.
    #[must_use]
    pub fn local_to_screen(&self, local: Point) -> Point {
        Point {
            x: local.x * self.scale + self.translate_x,
            y: local.y * self.scale + self.translate_y,
        }
    }

    /// Convert a screen point (relative to the container origin) back to container-local pixels.
    #[must_use]
    pub fn screen_to_local(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.translate_x) / self.scale,
            y: (screen.y - self.translate_y) / self.scale,
        }
    }

    /// Rescale to `new_scale` keeping the content under `pivot` fixed on screen.
    #[must_use]
    pub fn rescaled_about(&self, pivot: Point, new_scale: f64) -> Self {
        let local = self.screen_to_local(pivot);
        Self {
            scale: new_scale,
            translate_x: pivot.x - local.x * new_scale,
            translate_y: pivot.y - local.y * new_scale,
        }
    }

    /// Shift by a screen-pixel delta. Independent of scale.
    #[must_use]
    pub fn panned(&self, dx: f64, dy: f64) -> Self {
        Self {
            scale: self.scale,
            translate_x: self.translate_x + dx,
            translate_y: self.translate_y + dy,
        }
    }
}

/// Direction of a discrete zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Owns the current [`ViewTransform`] and applies clamped pan/zoom operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewController {
    transform: ViewTransform,
    min_zoom: f64,
    max_zoom: f64,
    step_factor: f64,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(MIN_ZOOM, MAX_ZOOM, ZOOM_STEP_FACTOR)
    }
}

impl ViewController {
    /// Create a controller at the identity transform with the given limits.
    #[must_use]
    pub fn new(min_zoom: f64, max_zoom: f64, step_factor: f64) -> Self {
        Self { transform: ViewTransform::default(), min_zoom, max_zoom, step_factor }
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Replace the transform wholesale, clamping its scale into range.
    pub fn set(&mut self, transform: ViewTransform) {
        self.transform = ViewTransform { scale: self.clamp(transform.scale), ..transform };
    }

    /// Add `delta_scale` to the scale, keeping the content under `pivot` fixed.
    ///
    /// `pivot` is in container-relative screen pixels (e.g. the wheel cursor).
    pub fn zoom_at_point(&mut self, pivot: Point, delta_scale: f64) {
        let new_scale = self.clamp(self.transform.scale + delta_scale);
        self.transform = self.transform.rescaled_about(pivot, new_scale);
    }

    /// Multiply or divide the scale by the step factor, anchored at the container centre.
    pub fn zoom_step(&mut self, direction: ZoomDirection, container_width: f64, container_height: f64) {
        let center = Point::new(container_width * 0.5, container_height * 0.5);
        let scale = self.transform.scale;
        let new_scale = match direction {
            ZoomDirection::In => self.clamp(scale * self.step_factor),
            ZoomDirection::Out => self.clamp(scale / self.step_factor),
        };
        self.transform = self.transform.rescaled_about(center, new_scale);
    }

    /// Return to scale 1 with no translation.
    pub fn reset_view(&mut self) {
        self.transform = ViewTransform::default();
    }

    /// Pan by a screen-pixel delta (1:1 with pointer movement).
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform.panned(dx, dy);
    }

    fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min_zoom, self.max_zoom)
    }
}
