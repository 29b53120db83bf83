//! Terminal event abstraction.
//!
//! A background task reads crossterm events and forwards the ones the app
//! reacts to over a channel, so the main loop only ever awaits a receiver.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

impl AppEvent {
    /// Map a raw crossterm event, dropping key releases/repeats and the
    /// event kinds we never handle.
    fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) if k.kind == KeyEventKind::Press => Some(Self::Key(k)),
            CtEvent::Mouse(m) => Some(Self::Mouse(m)),
            CtEvent::Resize(w, h) => Some(Self::Resize(w, h)),
            _ => None,
        }
    }
}

/// Spawns a background task that reads terminal events and sends them
/// through the returned channel.  The task stops once the receiver is
/// dropped; `poll_interval` bounds how long that takes to notice.
pub fn spawn_event_reader(poll_interval: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(poll_interval) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(err) => {
                    tracing::error!("terminal poll failed: {err}");
                    break;
                }
            }
            let ev = match event::read() {
                Ok(ev) => ev,
                Err(err) => {
                    tracing::error!("terminal read failed: {err}");
                    break;
                }
            };
            if let Some(app_event) = AppEvent::from_crossterm(ev) {
                if tx.send(app_event).is_err() {
                    break; // receiver dropped
                }
            }
        }
    });

    rx
}
