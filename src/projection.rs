//! Web Mercator helpers for the raster tile map.
//!
//! World pixel space at zoom `z` is a square of `256 * 2^z` pixels with the
//! origin at the north-west corner (lon -180, lat ~85.05).

use crate::catalog::Coordinates;
use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;
/// Latitude where Web Mercator becomes square.
pub const MAX_LATITUDE: f64 = 85.051_128_78;
/// Deepest tile level requested. Keeps tile indices well inside `u32`.
pub const MAX_TILE_ZOOM: f64 = 22.0;

pub fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * 2f64.powf(zoom)
}

/// Coordinates to world pixels at `zoom`.
pub fn project(c: Coordinates, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = c.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (c.longitude + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// World pixels at `zoom` back to coordinates. Longitude is wrapped into [-180, 180).
pub fn unproject(x: f64, y: f64, zoom: f64) -> Coordinates {
    let size = world_size(zoom);
    let lon = x / size * 360.0 - 180.0;
    let n = PI * (1.0 - 2.0 * y / size);
    let lat = n.sinh().atan().to_degrees();
    Coordinates::new(
        wrap_longitude(lon),
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE),
    )
}

pub fn wrap_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// A raster tile placed in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedTile {
    pub z: u32,
    pub x: u32,
    pub y: u32,
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

/// Tiles covering a `width` x `height` viewport centered on `center`.
/// Fractional zooms use the tiles of the level below, scaled up.
pub fn covering_tiles(center: Coordinates, zoom: f64, width: f64, height: f64) -> Vec<PlacedTile> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let zoom = zoom.clamp(0.0, MAX_TILE_ZOOM);
    let z = zoom.floor();
    let scale = 2f64.powf(zoom - z);
    let tile_px = TILE_SIZE * scale;
    let n = 2f64.powf(z) as i64;
    let (cx, cy) = project(center, z);
    let origin_x = cx - width / (2.0 * scale);
    let origin_y = cy - height / (2.0 * scale);

    let x0 = (origin_x / TILE_SIZE).floor() as i64;
    let x1 = ((origin_x + width / scale) / TILE_SIZE).floor() as i64;
    let y0 = ((origin_y / TILE_SIZE).floor() as i64).max(0);
    let y1 = (((origin_y + height / scale) / TILE_SIZE).floor() as i64).min(n - 1);

    let mut tiles = Vec::new();
    for ty in y0..=y1 {
        for tx in x0..=x1 {
            tiles.push(PlacedTile {
                z: z as u32,
                x: tx.rem_euclid(n) as u32,
                y: ty as u32,
                left: (tx as f64 * TILE_SIZE - origin_x) * scale,
                top: (ty as f64 * TILE_SIZE - origin_y) * scale,
                size: tile_px,
            });
        }
    }
    tiles
}

/// Where `point` lands in a viewport centered on `center`.
pub fn screen_position(
    point: Coordinates,
    center: Coordinates,
    zoom: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let (px, py) = project(point, zoom);
    let (cx, cy) = project(center, zoom);
    (px - cx + width / 2.0, py - cy + height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAM: Coordinates = Coordinates::new(4.900272, 52.379189);

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn origin_projects_to_world_center() {
        let (x, y) = project(Coordinates::new(0.0, 0.0), 0.0);
        assert!(close(x, 128.0, 1e-9));
        assert!(close(y, 128.0, 1e-9));
    }

    #[test]
    fn unproject_inverts_project() {
        let (x, y) = project(DAM, 16.0);
        let back = unproject(x, y, 16.0);
        assert!(close(back.longitude, DAM.longitude, 1e-9));
        assert!(close(back.latitude, DAM.latitude, 1e-9));
    }

    #[test]
    fn polar_latitudes_are_clamped() {
        let (_, y) = project(Coordinates::new(0.0, 90.0), 1.0);
        assert!(close(y, 0.0, 1e-6));
    }

    #[test]
    fn longitude_wraps() {
        assert!(close(wrap_longitude(190.0), -170.0, 1e-9));
        assert!(close(wrap_longitude(-190.0), 170.0, 1e-9));
        assert!(close(wrap_longitude(4.9), 4.9, 1e-9));
    }

    #[test]
    fn center_lands_mid_viewport() {
        let (x, y) = screen_position(DAM, DAM, 16.0, 800.0, 600.0);
        assert!(close(x, 400.0, 1e-6));
        assert!(close(y, 300.0, 1e-6));
    }

    #[test]
    fn covering_tiles_contain_the_center_tile() {
        let tiles = covering_tiles(DAM, 16.0, 800.0, 600.0);
        let (cx, cy) = project(DAM, 16.0);
        let (tx, ty) = ((cx / TILE_SIZE) as u32, (cy / TILE_SIZE) as u32);
        let center = tiles.iter().find(|t| t.x == tx && t.y == ty).unwrap();
        assert_eq!(center.z, 16);
        assert!(center.left <= 400.0 && center.left + center.size >= 400.0);
        assert!(center.top <= 300.0 && center.top + center.size >= 300.0);
        // 800x600 needs at least 4x3 tiles of 256px
        assert!(tiles.len() >= 12);
    }

    #[test]
    fn covering_tiles_wrap_around_the_antimeridian() {
        let tiles = covering_tiles(Coordinates::new(179.99, 0.0), 2.0, 512.0, 256.0);
        let xs: Vec<u32> = tiles.iter().map(|t| t.x).collect();
        assert!(xs.contains(&3));
        assert!(xs.contains(&0));
        assert!(xs.iter().all(|x| *x < 4));
    }

    #[test]
    fn fractional_zoom_scales_tiles() {
        let tiles = covering_tiles(DAM, 15.5, 400.0, 400.0);
        assert!(tiles.iter().all(|t| t.z == 15));
        assert!(close(tiles[0].size, 256.0 * 2f64.sqrt(), 1e-9));
    }

    #[test]
    fn out_of_range_zoom_is_clamped_to_tile_levels() {
        assert_eq!(
            covering_tiles(DAM, -6.0, 1280.0, 720.0),
            covering_tiles(DAM, 0.0, 1280.0, 720.0)
        );
        let deep = covering_tiles(DAM, 40.0, 800.0, 600.0);
        assert!(deep.iter().all(|t| t.z == MAX_TILE_ZOOM as u32));
        assert!(deep.len() <= 20);
    }

    #[test]
    fn empty_viewport_has_no_tiles() {
        assert!(covering_tiles(DAM, 16.0, 0.0, 300.0).is_empty());
    }
}
