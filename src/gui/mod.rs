mod scenery;
mod sprite;

pub use scenery::Scenery;
pub use sprite::Assets;

use quicksilver::{
    geom::{Circle, Rectangle},
    graphics::{Background::{Col, Img}, Image},
    lifecycle::Window,
    Result,
};
use crate::game::Session;

/// GPU-side sprites plus the background, drawn back to front each frame.
pub struct GameWindow {
    avatar: Image,
    segment: Image,
    scenery: Scenery,
}

impl GameWindow {
    /// Must run once the GL context exists.
    pub fn new(assets: &Assets, scenery: Scenery) -> Result<GameWindow> {
        let avatar = assets.avatar.upload()?;
        let segment = assets.segment.upload()?;
        Ok(GameWindow { avatar, segment, scenery })
    }

    pub fn draw(&self, window: &mut Window, session: &Session) -> Result<()> {
        window.clear(scenery::SKY)?;

        for blob in self.scenery.blobs() {
            window.draw(&Circle::new(blob.center, blob.radius), Col(blob.color));
        }

        let avatar = session.avatar();
        window.draw(&Rectangle::new(avatar.pos, avatar.size), Img(&self.avatar));

        let obstacle = session.obstacle();
        let screen_height = session.rules().screen_size.y;
        for segment in obstacle.segments(screen_height) {
            window.draw(
                &Rectangle::new(segment, (obstacle.segment_size, obstacle.segment_size)),
                Img(&self.segment)
            );
        }
        Ok(())
    }
}
