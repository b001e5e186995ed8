use crate::game::model::Avatar;
use crate::game::rules::GameRules;
use crate::game::MinMax;

/// Vertical acceleration for one tick. A flap replaces gravity for that tick.
pub fn acceleration(rules: &GameRules, flap: bool) -> f32 {
    if flap {
        -rules.flap_power
    } else {
        rules.gravity
    }
}

/// One fixed-timestep Euler step, then the velocity and border clamps.
pub fn integrate(avatar: &mut Avatar, acceleration: f32, rules: &GameRules) {
    avatar.velocity_y += acceleration;
    avatar.pos.y += avatar.velocity_y;

    avatar.velocity_y = f32::min_max(avatar.velocity_y, -rules.max_velocity, rules.max_velocity);

    let floor = rules.screen_size.y - avatar.size.y;
    if avatar.pos.y < 0f32 || avatar.pos.y > floor {
        avatar.pos.y = f32::min_max(avatar.pos.y, 0f32, floor);
        avatar.velocity_y = 0f32;
    }
}
