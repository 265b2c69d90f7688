//! Collision detection for the runner
//!
//! Everything on the track is an axis-aligned box: the player is a fixed
//! square, hazards are their own rectangles, and collectibles are a box of
//! ±`COIN_HALF_EXTENT` around their centre.

use glam::Vec2;

use super::state::{Collectible, Hazard, PlayerBody};
use crate::consts::*;

/// Axis-aligned bounding box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, max: min + size }
    }

    /// Box of ±`half` around `center`
    pub fn around(center: Vec2, half: f32) -> Self {
        Self {
            min: center - Vec2::splat(half),
            max: center + Vec2::splat(half),
        }
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Overlap or shared edge
    pub fn touches(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// The player's collision box
pub fn player_box(player: &PlayerBody) -> Aabb {
    Aabb::new(player.pos, Vec2::splat(PLAYER_SIZE))
}

pub fn hazard_box(hazard: &Hazard) -> Aabb {
    Aabb::new(hazard.pos, hazard.size)
}

pub fn collectible_box(coin: &Collectible) -> Aabb {
    Aabb::around(coin.pos, COIN_HALF_EXTENT)
}

/// Whether the player is in contact with a hazard.
///
/// A shared edge counts: a barrier sitting on the ground line touches a
/// grounded player's box along the ground line and must be jumped.
pub fn hits_hazard(player: &PlayerBody, hazard: &Hazard) -> bool {
    player_box(player).touches(&hazard_box(hazard))
}

/// Whether the player overlaps an uncollected collectible
pub fn reaches_collectible(player: &PlayerBody, coin: &Collectible) -> bool {
    !coin.collected && player_box(player).overlaps(&collectible_box(coin))
}

/// First hazard the player is touching, if any. One is enough to end a run.
pub fn first_hazard_hit<'a>(player: &PlayerBody, hazards: &'a [Hazard]) -> Option<&'a Hazard> {
    hazards.iter().find(|h| hits_hazard(player, h))
}

/// Mark every collectible the player overlaps as collected; returns their ids
pub fn collect_overlapping(player: &PlayerBody, coins: &mut [Collectible]) -> Vec<u32> {
    let mut collected = Vec::new();
    for coin in coins.iter_mut() {
        if reaches_collectible(player, coin) {
            coin.collected = true;
            collected.push(coin.id);
        }
    }
    collected
}
