mod game;
mod gui;

use std::io;
use std::process;

use anyhow::Context;
use log::{debug, error, info};
use quicksilver::{
    input::ButtonState,
    lifecycle::{run_with, Event, Settings, State, Window},
    Result,
};
use crate::game::{input, GameRules, InputEvent, Outcome, Session};
use crate::game::session::TITLE;
use crate::gui::{Assets, GameWindow, Scenery};

struct FlappiByrd {
    session: Session,
    game_window: GameWindow,
    pending: Vec<InputEvent>,
    title: String,
}

impl FlappiByrd {
    fn with_assets(rules: GameRules, assets: &Assets) -> Result<Self> {
        let scenery = Scenery::generate(rules.screen_size, &mut rand::thread_rng());
        let game_window = GameWindow::new(assets, scenery)?;
        let session = Session::new(rules, assets.avatar.size(), assets.segment_size());
        info!("avatar {:?}, segment {}px", assets.avatar.size(), assets.segment_size());
        Ok(FlappiByrd { session, game_window, pending: Vec::new(), title: String::new() })
    }
}

impl State for FlappiByrd {
    // Only reached through `run`; `launch` builds the game with `run_with`.
    fn new() -> Result<Self> {
        let assets = load_assets()
            .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("{:#}", err)))?;
        FlappiByrd::with_assets(GameRules::default(), &assets)
    }

    fn update(&mut self, window: &mut Window) -> Result<()> {
        let control = input::sample(self.pending.drain(..));
        match self.session.step(control) {
            Outcome::Crashed { lost_score } => info!("crashed, score {} lost", lost_score),
            Outcome::Scored { score } => debug!("obstacle cleared, score {}", score),
            Outcome::Flying => {}
        }

        let title = self.session.title();
        if title != self.title {
            window.set_title(&title);
            self.title = title;
        }

        if !self.session.running() {
            info!("quitting with score {}", self.session.score());
            window.close();
        }
        Ok(())
    }

    fn event(&mut self, event: &Event, _window: &mut Window) -> Result<()> {
        let input = match *event {
            Event::Closed => InputEvent::Closed,
            Event::Key(key, ButtonState::Pressed) => InputEvent::KeyDown(key),
            Event::Key(key, ButtonState::Released) => InputEvent::KeyUp(key),
            _ => return Ok(()),
        };
        self.pending.push(input);
        Ok(())
    }

    fn draw(&mut self, window: &mut Window) -> Result<()> {
        self.game_window.draw(window, &self.session)
    }
}

fn load_assets() -> anyhow::Result<Assets> {
    Assets::load().context("cannot start without sprites")
}

fn launch() -> anyhow::Result<()> {
    let rules = GameRules::default();
    let assets = load_assets()?;

    let settings = Settings {
        update_rate: rules.tick_millis(),
        ..Settings::default()
    };
    info!("starting at {} ticks per second", rules.ticks_per_second);
    run_with(TITLE, rules.screen_size, settings, move || FlappiByrd::with_assets(rules, &assets));
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = launch() {
        error!("{:#}", err);
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}
