//! Terminal event abstraction.
//!
//! Wraps crossterm events into a smaller enum and runs a blocking reader on
//! tokio's blocking pool that forwards them over a channel, so the main loop
//! only ever awaits.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

impl AppEvent {
    /// Map a raw terminal event; focus and paste events are dropped.
    pub fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) => Some(AppEvent::Key(k)),
            CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
            CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// What the reader loop does after one poll.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Send(AppEvent),
    Skip,
    Stop,
}

/// Decide the next step from a poll result, reading the event when one is
/// ready.  Any terminal error stops the reader.
fn next_step(polled: io::Result<bool>, read: impl FnOnce() -> io::Result<CtEvent>) -> Step {
    match polled {
        Ok(true) => match read() {
            Ok(ev) => AppEvent::from_crossterm(ev).map_or(Step::Skip, Step::Send),
            Err(err) => {
                tracing::warn!(%err, "terminal read failed");
                Step::Stop
            }
        },
        Ok(false) => Step::Send(AppEvent::Tick),
        Err(err) => {
            tracing::warn!(%err, "terminal poll failed");
            Step::Stop
        }
    }
}

/// Spawns a reader that polls the terminal and sends events through the
/// returned channel.  A `Tick` is sent whenever `tick_rate` passes quietly.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        match next_step(event::poll(tick_rate), event::read) {
            Step::Send(next) => {
                if tx.send(next).is_err() {
                    break; // receiver dropped
                }
            }
            Step::Skip => {}
            Step::Stop => break,
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn keeps_input_and_resize_events() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(AppEvent::from_crossterm(CtEvent::Key(key)), Some(AppEvent::Key(key)));
        assert_eq!(
            AppEvent::from_crossterm(CtEvent::Resize(100, 40)),
            Some(AppEvent::Resize(100, 40))
        );
        assert_eq!(AppEvent::from_crossterm(CtEvent::FocusGained), None);
    }

    #[test]
    fn terminal_errors_stop_the_reader() {
        let failing_read = || -> io::Result<CtEvent> { Err(io::Error::other("tty gone")) };
        assert_eq!(next_step(Ok(true), failing_read), Step::Stop);
        assert_eq!(
            next_step(Err(io::Error::other("poll failed")), || Ok(CtEvent::FocusLost)),
            Step::Stop
        );
    }

    #[test]
    fn quiet_polls_tick_and_dropped_events_are_skipped() {
        assert_eq!(next_step(Ok(false), || Ok(CtEvent::FocusLost)), Step::Send(AppEvent::Tick));
        assert_eq!(next_step(Ok(true), || Ok(CtEvent::FocusLost)), Step::Skip);
        assert_eq!(
            next_step(Ok(true), || Ok(CtEvent::Resize(90, 30))),
            Step::Send(AppEvent::Resize(90, 30))
        );
    }
}
