use quicksilver::geom::Vector;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::input::Control;
use crate::game::judge::judge;
use crate::game::model::{Avatar, Obstacle};
use crate::game::physics;
use crate::game::rules::GameRules;

pub const TITLE: &str = "Flappi Byrd";

/// What happened during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Flying,
    Crashed { lost_score: u32 },
    Scored { score: u32 },
}

/// Every piece of mutable game state. The frame loop owns one and steps it
/// once per tick.
pub struct Session {
    avatar: Avatar,
    obstacle: Obstacle,
    score: u32,
    running: bool,
    rules: GameRules,
    rng: StdRng,
}

impl Session {
    pub fn new(rules: GameRules, avatar_size: Vector, segment_size: f32) -> Session {
        Session::with_rng(rules, avatar_size, segment_size, StdRng::from_entropy())
    }

    pub fn with_rng(rules: GameRules, avatar_size: Vector, segment_size: f32, rng: StdRng) -> Session {
        let avatar = Avatar::new(rules.avatar_start(), avatar_size);
        let obstacle = Obstacle::new(&rules, segment_size, avatar_size.y);
        Session { avatar, obstacle, score: 0, running: true, rules, rng }
    }

    /// Advances the game by one tick: physics, scroll, collision, recycle.
    /// A quit request only clears the running flag; the tick still completes.
    pub fn step(&mut self, control: Control) -> Outcome {
        if control.quit {
            self.running = false;
        }

        let acceleration = physics::acceleration(&self.rules, control.flap);
        physics::integrate(&mut self.avatar, acceleration, &self.rules);

        self.obstacle.scroll(self.rules.obstacle_speed);

        if judge(&self.avatar, &self.obstacle).is_collision() {
            let lost_score = self.score;
            self.reset();
            return Outcome::Crashed { lost_score };
        }

        if self.obstacle.is_off_screen() {
            self.score += 1;
            self.obstacle.recycle(&self.rules, &mut self.rng);
            return Outcome::Scored { score: self.score };
        }
        Outcome::Flying
    }

    fn reset(&mut self) {
        self.avatar = Avatar::new(self.rules.avatar_start(), self.avatar.size);
        self.obstacle.reset(&self.rules);
        self.score = 0;
    }

    pub fn title(&self) -> String {
        format!("{} - Score {}", TITLE, self.score)
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }
}
