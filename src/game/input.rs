use quicksilver::input::Key;

/// Platform events the game cares about, already stripped of windowing types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Closed,
    KeyDown(Key),
    KeyUp(Key),
}

/// The control signal for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Control {
    pub quit: bool,
    pub flap: bool,
}

/// Folds a whole batch of queued events into one control signal. Flap is a
/// flag, so several presses in one batch flap once.
pub fn sample<I>(events: I) -> Control
where
    I: IntoIterator<Item = InputEvent>,
{
    events.into_iter().fold(Control::default(), |mut control, event| {
        match event {
            InputEvent::Closed => control.quit = true,
            InputEvent::KeyDown(Key::Escape) => control.quit = true,
            InputEvent::KeyDown(Key::Space) => control.flap = true,
            _ => {}
        }
        control
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_is_idle() {
        assert_eq!(sample(Vec::new()), Control::default());
    }

    #[test]
    fn repeated_flaps_are_idempotent() {
        let once = sample(vec![InputEvent::KeyDown(Key::Space)]);
        let many = sample(vec![InputEvent::KeyDown(Key::Space); 5]);
        assert_eq!(once, many);
        assert_eq!(many, Control { quit: false, flap: true });
    }

    #[test]
    fn close_and_escape_quit() {
        assert!(sample(vec![InputEvent::Closed]).quit);
        assert!(sample(vec![InputEvent::KeyDown(Key::Escape)]).quit);
    }

    #[test]
    fn releases_and_other_keys_are_ignored() {
        let control = sample(vec![
            InputEvent::KeyUp(Key::Space),
            InputEvent::KeyUp(Key::Escape),
            InputEvent::KeyDown(Key::A),
        ]);
        assert_eq!(control, Control::default());
    }

    #[test]
    fn whole_batch_is_drained() {
        let mut queue = vec![
            InputEvent::KeyDown(Key::Space),
            InputEvent::KeyDown(Key::A),
            InputEvent::KeyDown(Key::Escape),
        ];
        let control = sample(queue.drain(..));
        assert_eq!(control, Control { quit: true, flap: true });
        assert!(queue.is_empty());
    }
}
