//! Landing detection between the player and platform tops
//!
//! Platforms are one-way: the player only collides with a platform's top edge
//! while falling, and passes through from below.

use super::body::Body;

/// Result of a landing check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    /// Y coordinate the player's bottom edge snaps to
    pub surface_y: f32,
}

/// Whether a platform is close enough vertically to be worth testing
///
/// Compares top edges against half the screen height.
#[inline]
pub fn within_scan_window(player: &Body, platform: &Body, window: f32) -> bool {
    (platform.top() - player.top()).abs() < window
}

/// Check whether a falling player lands on top of a platform this tick
///
/// Lands when the player's bottom edge is within `[top, top + tolerance]`,
/// the horizontal extents touch and the player is moving downward.
pub fn landing_on(player: &Body, platform: &Body, tolerance: f32) -> Option<Landing> {
    let feet = player.bottom();
    let top = platform.top();

    let in_band = feet >= top && feet <= top + tolerance;
    if in_band && player.overlaps_x(platform) && player.vel.y > 0.0 {
        Some(Landing { surface_y: top })
    } else {
        None
    }
}
