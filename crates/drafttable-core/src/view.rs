//! View rectangle for pan and zoom.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Width of the default view; zoom percentages are relative to it.
pub const BASE_VIEW_WIDTH: f64 = 800.0;
/// Height of the default view.
pub const BASE_VIEW_HEIGHT: f64 = 600.0;

/// Scale applied per wheel notch when zooming out.
const WHEEL_OUT: f64 = 1.1;
/// Scale applied per wheel notch when zooming in.
const WHEEL_IN: f64 = 0.9;

/// The visible part of the plane.
///
/// `x`/`y` is the top-left corner in plane coordinates and `w`/`h` the
/// visible extent. Mapping to screen pixels needs the viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Default for View {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: BASE_VIEW_WIDTH,
            h: BASE_VIEW_HEIGHT,
        }
    }
}

impl View {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// The view as a plane-space rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }

    /// Plane units per screen pixel, per axis. Used for pan deltas only.
    fn scale(&self, viewport: Size) -> Vec2 {
        Vec2::new(self.w / viewport.width, self.h / viewport.height)
    }

    /// Uniform screen pixels per plane unit and the letterbox offset that
    /// centres the view in the viewport (`xMidYMid meet`).
    fn fit(&self, viewport: Size) -> (f64, Vec2) {
        let scale = (viewport.width / self.w).min(viewport.height / self.h);
        let offset = Vec2::new(
            (viewport.width - self.w * scale) / 2.0,
            (viewport.height - self.h * scale) / 2.0,
        );
        (scale, offset)
    }

    /// Convert a viewport-relative screen point to plane coordinates.
    ///
    /// The view is fitted with one uniform scale and centred, so when the
    /// viewport aspect differs from the view's the plane extends past the view
    /// rectangle on one axis.
    pub fn screen_to_plane(&self, screen: Point, viewport: Size) -> Point {
        let (scale, offset) = self.fit(viewport);
        Point::new(
            self.x + (screen.x - offset.x) / scale,
            self.y + (screen.y - offset.y) / scale,
        )
    }

    /// Convert a plane point to viewport-relative screen coordinates.
    pub fn plane_to_screen(&self, plane: Point, viewport: Size) -> Point {
        self.transform(viewport) * plane
    }

    /// Affine mapping plane coordinates to screen pixels, for renderers.
    pub fn transform(&self, viewport: Size) -> Affine {
        let (scale, offset) = self.fit(viewport);
        Affine::translate(offset) * Affine::scale(scale) * Affine::translate(Vec2::new(-self.x, -self.y))
    }

    /// Shift the view so the plane follows a screen-space drag.
    ///
    /// The delta is converted per axis, matching [`View::screen_to_plane`]
    /// whenever the viewport has the view's aspect ratio.
    pub fn pan_by_screen_delta(&mut self, delta: Vec2, viewport: Size) {
        let s = self.scale(viewport);
        self.x -= delta.x * s.x;
        self.y -= delta.y * s.y;
    }

    /// Scale the visible extent by `factor`, keeping the centre fixed.
    pub fn zoom_about_center(&mut self, factor: f64) {
        let new_w = self.w * factor;
        let new_h = self.h * factor;
        self.x += (self.w - new_w) / 2.0;
        self.y += (self.h - new_h) / 2.0;
        self.w = new_w;
        self.h = new_h;
    }

    /// Wheel zoom: scrolling down widens the view, scrolling up narrows it.
    pub fn zoom_wheel(&mut self, delta_y: f64) {
        let factor = if delta_y > 0.0 { WHEEL_OUT } else { WHEEL_IN };
        self.zoom_about_center(factor);
    }

    /// Toolbar zoom in. The origin stays put.
    pub fn zoom_in(&mut self) {
        self.w *= WHEEL_IN;
        self.h *= WHEEL_IN;
    }

    /// Toolbar zoom out. The origin stays put.
    pub fn zoom_out(&mut self) {
        self.w *= WHEEL_OUT;
        self.h *= WHEEL_OUT;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Zoom level for display, 100 at the default width.
    pub fn zoom_percent(&self) -> i64 {
        (BASE_VIEW_WIDTH / self.w * 100.0).round() as i64
    }
}
