/// Pointer travel, in points, after which a press becomes a drag.
pub const DRAG_THRESHOLD: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerGesture {
    Click { x: f32, y: f32 },
    Drag { total_dx: f32 },
}

/// Tells a click on a thumbnail apart from a drag of the strip that holds it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTracker {
    threshold: f32,
    origin: Option<(f32, f32)>,
    last_x: f32,
    dragging: bool,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD)
    }
}

impl GestureTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            origin: None,
            last_x: 0.0,
            dragging: false,
        }
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.origin = Some((x, y));
        self.last_x = x;
        self.dragging = false;
    }

    /// Returns the horizontal scroll delta once the press has turned into a drag.
    pub fn motion(&mut self, x: f32, y: f32) -> Option<f32> {
        let (origin_x, origin_y) = self.origin?;
        if !self.dragging {
            if !self.motion_exceeds(origin_x, origin_y, x, y) {
                return None;
            }
            self.dragging = true;
        }
        let delta = x - self.last_x;
        self.last_x = x;
        Some(delta)
    }

    pub fn release(&mut self, x: f32, y: f32) -> Option<PointerGesture> {
        let (origin_x, origin_y) = self.origin.take()?;
        let was_dragging = self.dragging || self.motion_exceeds(origin_x, origin_y, x, y);
        self.dragging = false;
        if was_dragging {
            Some(PointerGesture::Drag {
                total_dx: x - origin_x,
            })
        } else {
            Some(PointerGesture::Click {
                x: origin_x,
                y: origin_y,
            })
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn motion_exceeds(&self, origin_x: f32, origin_y: f32, x: f32, y: f32) -> bool {
        ((x - origin_x).powi(2) + (y - origin_y).powi(2)).sqrt() > self.threshold
    }
}
