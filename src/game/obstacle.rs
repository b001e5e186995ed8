use quicksilver::geom::Vector;
use rand::Rng;

use crate::game::model::Obstacle;
use crate::game::rules::GameRules;

impl Obstacle {
    pub fn new(rules: &GameRules, segment_size: f32, avatar_height: f32) -> Obstacle {
        Obstacle {
            pos_x: rules.obstacle_start_x(segment_size),
            opening_y: rules.screen_size.y / 2f32,
            opening_height: avatar_height * rules.opening_factor,
            segment_size,
        }
    }

    pub fn reset(&mut self, rules: &GameRules) {
        self.pos_x = rules.obstacle_start_x(self.segment_size);
        self.opening_y = rules.screen_size.y / 2f32;
    }

    pub fn scroll(&mut self, speed: f32) {
        self.pos_x -= speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos_x < -self.segment_size
    }

    /// Moves the obstacle back to the right edge with a fresh gap centre
    /// drawn from `[opening_height, screen_height - opening_height)`.
    pub fn recycle(&mut self, rules: &GameRules, rng: &mut impl Rng) {
        self.pos_x = rules.screen_size.x;
        let low = self.opening_height;
        let high = rules.screen_size.y - self.opening_height;
        self.opening_y = if low < high {
            rng.gen_range(low, high)
        } else {
            rules.screen_size.y / 2f32
        };
    }

    /// Top-left corners of the wall blocks. Blocks above the gap are stacked
    /// upward until the next one would be fully off screen; blocks below are
    /// stacked down until one starts past the bottom edge.
    pub fn segments(&self, screen_height: f32) -> Vec<Vector> {
        let mut segments = Vec::new();

        let mut above_y = self.opening_top() - self.segment_size;
        while above_y > -self.segment_size {
            segments.push(Vector::new(self.pos_x, above_y));
            above_y -= self.segment_size;
        }

        let mut below_y = self.opening_bottom();
        while below_y < screen_height {
            segments.push(Vector::new(self.pos_x, below_y));
            below_y += self.segment_size;
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn obstacle() -> (GameRules, Obstacle) {
        let rules = GameRules::default();
        let obstacle = Obstacle::new(&rules, 40f32, 24f32);
        (rules, obstacle)
    }

    #[test]
    fn starts_at_right_edge_with_centred_gap() {
        let (_, obstacle) = obstacle();
        assert_eq!(obstacle.pos_x, 400f32);
        assert_eq!(obstacle.opening_y, 200f32);
        assert_eq!(obstacle.opening_height, 72f32);
        assert_eq!(obstacle.opening_top(), 164f32);
        assert_eq!(obstacle.opening_bottom(), 236f32);
    }

    #[test]
    fn off_screen_only_past_one_segment() {
        let (_, mut obstacle) = obstacle();
        obstacle.pos_x = -40f32;
        assert!(!obstacle.is_off_screen());
        obstacle.scroll(1f32);
        assert!(obstacle.is_off_screen());
    }

    #[test]
    fn recycle_moves_to_screen_width_with_gap_in_range() {
        let (rules, mut obstacle) = obstacle();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            obstacle.pos_x = -41f32;
            obstacle.recycle(&rules, &mut rng);
            assert_eq!(obstacle.pos_x, 440f32);
            assert!(obstacle.opening_y >= 72f32);
            assert!(obstacle.opening_y < 400f32 - 72f32);
        }
    }

    #[test]
    fn reset_restores_start() {
        let (rules, mut obstacle) = obstacle();
        obstacle.pos_x = 12f32;
        obstacle.opening_y = 300f32;
        obstacle.reset(&rules);
        assert_eq!(obstacle, Obstacle::new(&rules, 40f32, 24f32));
    }

    #[test]
    fn segments_fill_both_walls() {
        let (_, obstacle) = obstacle();
        let segments = obstacle.segments(400f32);
        let above: Vec<f32> = segments.iter().map(|s| s.y).filter(|y| *y < 164f32).collect();
        let below: Vec<f32> = segments.iter().map(|s| s.y).filter(|y| *y >= 236f32).collect();

        assert_eq!(above, vec![124f32, 84f32, 44f32, 4f32, -36f32]);
        assert_eq!(below, vec![236f32, 276f32, 316f32, 356f32, 396f32]);
        assert_eq!(above.len() + below.len(), segments.len());
        assert!(segments.iter().all(|s| s.x == 400f32));
    }
}
