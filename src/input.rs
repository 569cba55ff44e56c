use glam::DVec2;

/// Pointer gesture tracker. A press that moves further than the click
/// distance becomes a drag and no longer counts as a click on release.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub origin: DVec2,
    pub last: DVec2,
    pub moved: bool,
}

impl DragState {
    pub fn begin(&mut self, pos: DVec2) {
        *self = Self {
            active: true,
            origin: pos,
            last: pos,
            moved: false,
        };
    }

    /// Movement since the previous event while a gesture is active.
    pub fn update(&mut self, pos: DVec2, click_distance: f64) -> Option<DVec2> {
        if !self.active {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        if !self.moved && pos.distance_squared(self.origin) > click_distance * click_distance {
            self.moved = true;
        }
        Some(delta)
    }

    /// Ends the gesture; true if it was a click rather than a drag.
    pub fn end(&mut self) -> bool {
        let was_click = self.active && !self.moved;
        self.active = false;
        was_click
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }
}

/// Even-odd point-in-polygon over every ring, so holes and multipart
/// outlines behave like the canvas `evenodd` fill.
pub fn point_in_rings<R: AsRef<[DVec2]>>(rings: &[R], p: DVec2) -> bool {
    let mut inside = false;
    for ring in rings {
        let ring = ring.as_ref();
        let n = ring.len();
        if n < 3 {
            continue;
        }
        let mut j = n - 1;
        for i in 0..n {
            let (a, b) = (ring[i], ring[j]);
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
            j = i;
        }
    }
    inside
}
