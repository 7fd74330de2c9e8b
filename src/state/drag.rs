// Mouse drag tracking for the interactive map
#[derive(Default, Debug, Clone)]
pub struct Drag {
    pub active: bool,
    pub last_x: f64,
    pub last_y: f64,
}

impl Drag {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.active = true;
        self.last_x = x;
        self.last_y = y;
    }

    /// Pointer delta since the last call, or `None` when no drag is in progress.
    pub fn move_to(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !self.active {
            return None;
        }
        let delta = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(delta)
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}

/// CSS cursor for the map surface.
pub fn drag_cursor(interactive: bool, dragging: bool) -> &'static str {
    match (interactive, dragging) {
        (false, _) => "default",
        (true, false) => "grab",
        (true, true) => "grabbing",
    }
}
