use crate::game::model::{Avatar, Obstacle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The avatar's trailing edge is past the wall.
    Passed,
    /// The avatar's leading edge has not reached the wall yet.
    Approaching,
    /// Inside the wall's horizontal span and strictly within the gap.
    Clear,
    Collided,
}

impl Verdict {
    pub fn is_collision(self) -> bool {
        self == Verdict::Collided
    }
}

/// Classifies the avatar against the obstacle. The test is against the single
/// gap rectangle, not the individual wall blocks, and the first matching rule
/// wins.
pub fn judge(avatar: &Avatar, obstacle: &Obstacle) -> Verdict {
    if avatar.left() > obstacle.right() {
        Verdict::Passed
    } else if avatar.right() < obstacle.left() {
        Verdict::Approaching
    } else if obstacle.opening_top() < avatar.head() && obstacle.opening_bottom() > avatar.feet() {
        Verdict::Clear
    } else {
        Verdict::Collided
    }
}
