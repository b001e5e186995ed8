pub mod input;
pub mod judge;
pub mod model;
pub mod obstacle;
pub mod physics;
pub mod rules;
pub mod session;

pub use input::InputEvent;
pub use rules::GameRules;
pub use session::{Outcome, Session};

trait MinMax{
    type T;

    fn min_max(self, min: Self::T, max: Self::T) -> Self::T;
}

impl MinMax for f32{
    type T = f32;

    fn min_max(self, min: f32, max: f32) -> f32 {
        let value = f32::min(self, max);
        f32::max(value, min)
    }
}
