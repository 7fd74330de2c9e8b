//! Map view derived from the round, plus free pan/zoom by the player.

use crate::catalog::Coordinates;
use crate::config::{GameConfig, MAX_MAP_ZOOM, MIN_MAP_ZOOM};
use crate::model::RoundState;
use crate::projection::{project, unproject};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
}

impl ViewState {
    pub fn looking_at(c: Coordinates, zoom: f64) -> Self {
        Self {
            longitude: c.longitude,
            latitude: c.latitude,
            zoom,
        }
    }

    pub fn center(&self) -> Coordinates {
        Coordinates::new(self.longitude, self.latitude)
    }

    /// Moves the view by a pointer drag of `(dx, dy)` screen pixels.
    /// Dragging right reveals what is to the west.
    pub fn panned(&self, dx: f64, dy: f64) -> Self {
        let (x, y) = project(self.center(), self.zoom);
        Self::looking_at(unproject(x - dx, y - dy, self.zoom), self.zoom)
    }

    pub fn zoomed(&self, delta: f64) -> Self {
        Self {
            zoom: (self.zoom + delta).clamp(MIN_MAP_ZOOM, MAX_MAP_ZOOM),
            ..*self
        }
    }
}

/// The displayed view and the round it last followed.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub view: ViewState,
    round: u64,
    zoom_level: f64,
}

impl Viewport {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            view: ViewState::looking_at(cfg.default_center.into(), cfg.initial_zoom),
            round: 0,
            zoom_level: cfg.initial_zoom,
        }
    }

    /// Follows round transitions: a new round recenters on its station, a
    /// zoom-out hint changes only the zoom. Anything else (including player
    /// pan/zoom) is left as is. Returns whether the view changed.
    pub fn sync(&mut self, round: &RoundState) -> bool {
        if round.round != self.round {
            let Some(station) = &round.current_station else {
                return false;
            };
            self.round = round.round;
            self.zoom_level = round.zoom_level;
            self.view = ViewState::looking_at(station.coordinates, round.zoom_level);
            return true;
        }
        if round.zoom_level != self.zoom_level {
            self.zoom_level = round.zoom_level;
            self.view.zoom = round.zoom_level;
            return true;
        }
        false
    }

    /// Back to the station at the round's current hint zoom.
    pub fn recenter(&mut self, round: &RoundState) {
        if let Some(station) = &round.current_station {
            self.view = ViewState::looking_at(station.coordinates, round.zoom_level);
        }
    }

    pub fn user_moved(&mut self, view: ViewState) {
        self.view = view;
    }
}
