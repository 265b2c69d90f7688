//! Vertical physics for the runner: gravity, jump impulse, ground clamp

use super::state::PlayerBody;
use crate::consts::GROUND_Y;

/// Apply a jump impulse if the body is on the ground.
///
/// Returns whether the jump took effect. Requests while airborne are dropped,
/// never queued.
pub fn try_jump(body: &mut PlayerBody, jump_power: f32) -> bool {
    if body.is_jumping {
        return false;
    }
    body.velocity_y = -jump_power;
    body.is_jumping = true;
    true
}

/// Integrate one tick.
///
/// Position moves by the velocity from the start of the tick; gravity only
/// shows up in the next tick's movement.
pub fn step_body(body: &mut PlayerBody, gravity: f32) {
    let new_y = body.pos.y + body.velocity_y;
    let new_velocity = body.velocity_y + gravity;

    if new_y >= GROUND_Y {
        body.pos.y = GROUND_Y;
        body.velocity_y = 0.0;
        body.is_jumping = false;
    } else {
        body.pos.y = new_y;
        body.velocity_y = new_velocity;
        body.is_jumping = true;
    }
}
