use quicksilver::geom::Vector;

pub const SCREEN_WIDTH: f32 = 440f32;
pub const SCREEN_HEIGHT: f32 = 400f32;

/// Tuning values of one game.
///
/// Gravity, flap power and obstacle speed are per-tick quantities tuned for
/// `ticks_per_second`; changing the tick rate without rescaling them changes
/// how the game plays.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRules {
    pub screen_size: Vector,
    pub gravity: f32,
    pub flap_power: f32,
    pub max_velocity: f32,
    pub obstacle_speed: f32,
    /// Gap height as a multiple of the avatar height.
    pub opening_factor: f32,
    pub ticks_per_second: f64,
}

impl GameRules {
    pub fn tick_millis(&self) -> f64 {
        1000f64 / self.ticks_per_second
    }

    pub fn avatar_start(&self) -> Vector {
        Vector::new(self.screen_size.x / 3f32, self.screen_size.y / 2f32)
    }

    pub fn obstacle_start_x(&self, segment_size: f32) -> f32 {
        self.screen_size.x - segment_size
    }
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            screen_size: Vector::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            gravity: 0.098f32,
            flap_power: 4f32,
            max_velocity: 4f32,
            obstacle_speed: 4f32,
            opening_factor: 3f32,
            ticks_per_second: 30f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tick_is_thirty_per_second() {
        let rules = GameRules::default();
        assert!((rules.tick_millis() - 33.333).abs() < 0.001);
    }

    #[test]
    fn start_positions_follow_screen_size() {
        let rules = GameRules::default();
        let start = rules.avatar_start();
        assert!((start.x - 440f32 / 3f32).abs() < 1e-4);
        assert_eq!(start.y, 200f32);
        assert_eq!(rules.obstacle_start_x(40f32), 400f32);
    }
}
