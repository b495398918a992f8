//! RGBA pixel surface that mirrors an HTML canvas
//!
//! Byte layout matches `ImageData` (RGBA, row-major), so the wasm front-end
//! can forward the buffer into `putImageData` without conversion.

/// Opaque white
pub const WHITE: [u8; 4] = [255, 255, 255, 255];
/// Opaque black
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Fixed-size RGBA8 drawing surface
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA pixel buffer, ready for `ImageData`
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable access to the underlying buffer (used by the noise pass)
    pub fn as_rgba_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Clear the whole surface to transparent black
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Read one pixel, or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    fn set_pixel(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    /// Fill an axis-aligned rectangle, clipped to the surface
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, rgba: [u8; 4]) {
        let x0 = (x.round() as i32).max(0);
        let y0 = (y.round() as i32).max(0);
        let x1 = ((x + w).round() as i32).min(self.width as i32);
        let y1 = ((y + h).round() as i32).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px, py, rgba);
            }
        }
    }

    /// One-pixel rectangle outline, clipped to the surface
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, rgba: [u8; 4]) {
        let x0 = x.round() as i32;
        let y0 = y.round() as i32;
        let x1 = (x + w).round() as i32 - 1;
        let y1 = (y + h).round() as i32 - 1;
        for px in x0..=x1 {
            self.set_pixel(px, y0, rgba);
            self.set_pixel(px, y1, rgba);
        }
        for py in y0..=y1 {
            self.set_pixel(x0, py, rgba);
            self.set_pixel(x1, py, rgba);
        }
    }

    /// Filled circle via scanline distance test, clipped to the surface
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, rgba: [u8; 4]) {
        let x0 = (cx - radius).floor() as i32;
        let x1 = (cx + radius).ceil() as i32;
        let y0 = (cy - radius).floor() as i32;
        let y1 = (cy + radius).ceil() as i32;
        let r2 = radius * radius;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(px, py, rgba);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_clear() {
        let frame = Frame::new(4, 3);
        assert_eq!(frame.as_rgba().len(), 4 * 3 * 4);
        assert!(frame.as_rgba().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_rect() {
        let mut frame = Frame::new(8, 8);
        frame.fill_rect(2.0, 2.0, 3.0, 2.0, WHITE);
        assert_eq!(frame.pixel(2, 2), Some(WHITE));
        assert_eq!(frame.pixel(4, 3), Some(WHITE));
        assert_eq!(frame.pixel(5, 2), Some([0, 0, 0, 0]));
        assert_eq!(frame.pixel(2, 4), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_pixel_out_of_bounds_is_none() {
        let frame = Frame::new(8, 8);
        assert_eq!(frame.pixel(8, 0), None);
        assert_eq!(frame.pixel(0, 8), None);
        assert_eq!(frame.pixel(100, 100), None);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut frame = Frame::new(4, 4);
        frame.fill_rect(-2.0, -2.0, 10.0, 10.0, BLACK);
        assert!(frame.as_rgba().chunks(4).all(|p| p == BLACK));
    }

    #[test]
    fn test_stroke_rect_outline_only() {
        let mut frame = Frame::new(6, 6);
        frame.stroke_rect(1.0, 1.0, 4.0, 4.0, WHITE);
        assert_eq!(frame.pixel(1, 1), Some(WHITE));
        assert_eq!(frame.pixel(4, 1), Some(WHITE));
        assert_eq!(frame.pixel(1, 4), Some(WHITE));
        assert_eq!(frame.pixel(4, 4), Some(WHITE));
        // Interior untouched
        assert_eq!(frame.pixel(2, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_fill_circle() {
        let mut frame = Frame::new(16, 16);
        frame.fill_circle(8.0, 8.0, 4.0, WHITE);
        // Center filled
        assert_eq!(frame.pixel(8, 8), Some(WHITE));
        // Well outside the radius untouched
        assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 0]));
        assert_eq!(frame.pixel(8, 13), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_clear_resets_pixels() {
        let mut frame = Frame::new(4, 4);
        frame.fill_rect(0.0, 0.0, 4.0, 4.0, WHITE);
        frame.clear();
        assert!(frame.as_rgba().iter().all(|&b| b == 0));
    }
}
