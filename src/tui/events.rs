use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use crossterm::event::{self, Event as CEvent, KeyEvent};

use crate::utils::clock::{until_midnight, Clock};

#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    /// Local midnight passed at the prayer location.
    DayRollover,
}

/// Background thread feeding keys and timer events. It exits on its own
/// once the receiving side is dropped, so no event outlives the UI.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

fn next_midnight(now: Instant, local: NaiveDateTime) -> Instant {
    let wait = until_midnight(local).to_std().unwrap_or(Duration::ZERO);
    // Land just past midnight rather than just before it
    now + wait + Duration::from_millis(200)
}

/// Tick and rollover deadlines, advanced by the instants passed in.
struct Timers {
    tick_rate: Duration,
    last_tick: Instant,
    midnight: Instant,
}

impl Timers {
    fn new(tick_rate: Duration, now: Instant, local: NaiveDateTime) -> Self {
        Self {
            tick_rate,
            last_tick: now,
            midnight: next_midnight(now, local),
        }
    }

    fn timeout(&self, now: Instant) -> Duration {
        let until_tick = (self.last_tick + self.tick_rate).saturating_duration_since(now);
        until_tick.min(self.midnight.saturating_duration_since(now))
    }

    fn due(&mut self, now: Instant, local: NaiveDateTime) -> Vec<Event> {
        let mut due = Vec::new();
        if now >= self.midnight {
            due.push(Event::DayRollover);
            self.midnight = next_midnight(now, local);
        }
        if now.saturating_duration_since(self.last_tick) >= self.tick_rate {
            due.push(Event::Tick);
            self.last_tick = now;
        }
        due
    }
}

/// Sends `events` in order. False once the receiver is gone.
fn forward(tx: &mpsc::Sender<Event>, events: impl IntoIterator<Item = Event>) -> bool {
    events.into_iter().all(|e| tx.send(e).is_ok())
}

/// Runs until the receiver is dropped or `poll` fails. `poll` waits up to
/// the given timeout for a terminal event.
fn pump<P>(tx: &mpsc::Sender<Event>, tick_rate: Duration, clock: &dyn Clock, mut poll: P)
where
    P: FnMut(Duration) -> io::Result<Option<CEvent>>,
{
    let mut timers = Timers::new(tick_rate, Instant::now(), clock.now());
    loop {
        match poll(timers.timeout(Instant::now())) {
            Ok(Some(CEvent::Key(key))) => {
                if !forward(tx, [Event::Key(key)]) {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("Terminal event error: {}", e);
                break;
            }
        }

        if !forward(tx, timers.due(Instant::now(), clock.now())) {
            break;
        }
    }
}

fn poll_terminal(timeout: Duration) -> io::Result<Option<CEvent>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

impl EventHandler {
    pub fn new(tick_rate: Duration, clock: Arc<dyn Clock>) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            pump(&tx, tick_rate, clock.as_ref(), poll_terminal);
            log::debug!("Event thread stopped");
        });

        Self { rx }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::ManualClock;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn local(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn idle(timeout: Duration) -> io::Result<Option<CEvent>> {
        thread::sleep(timeout.min(Duration::from_millis(5)));
        Ok(None)
    }

    #[test]
    fn forward_reports_a_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        assert!(forward(&tx, [Event::Tick, Event::DayRollover]));
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![Event::Tick, Event::DayRollover]);

        drop(rx);
        assert!(!forward(&tx, [Event::Tick]));
    }

    #[test]
    fn tick_is_due_once_per_interval() {
        let start = Instant::now();
        let mut timers = Timers::new(Duration::from_secs(60), start, local(12, 0, 0));

        assert_eq!(timers.timeout(start), Duration::from_secs(60));
        assert!(timers.due(start + Duration::from_secs(59), local(12, 0, 59)).is_empty());
        assert_eq!(
            timers.due(start + Duration::from_secs(60), local(12, 1, 0)),
            vec![Event::Tick]
        );
        assert!(timers.due(start + Duration::from_secs(61), local(12, 1, 1)).is_empty());
    }

    #[test]
    fn rollover_is_due_just_after_local_midnight() {
        let start = Instant::now();
        let mut timers = Timers::new(Duration::from_secs(3600), start, local(23, 59, 0));
        assert_eq!(timers.timeout(start), Duration::from_millis(60_200));

        assert!(timers.due(start + Duration::from_secs(60), local(23, 59, 59)).is_empty());

        let after = start + Duration::from_secs(61);
        let next_day = local(0, 0, 1) + chrono::Duration::days(1);
        assert_eq!(timers.due(after, next_day), vec![Event::DayRollover]);
        // Next rollover is a day away
        assert!(timers.timeout(after) > Duration::from_secs(3500));
    }

    #[test]
    fn pump_exits_when_receiver_is_dropped() {
        let clock = ManualClock::new(local(12, 0, 0));
        let (tx, rx) = mpsc::channel();
        drop(rx);
        // Returns on the first failed send instead of spinning forever
        pump(&tx, Duration::from_millis(1), &clock, idle);
    }

    #[test]
    fn pump_delivers_until_ui_goes_away() {
        let (tx, rx) = mpsc::channel();
        let worker = thread::spawn(move || {
            let clock = ManualClock::new(local(12, 0, 0));
            let mut keys = vec![CEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))];
            pump(&tx, Duration::from_millis(1), &clock, |timeout| match keys.pop() {
                Some(key) => Ok(Some(key)),
                None => idle(timeout),
            });
        });

        assert_eq!(
            rx.recv().unwrap(),
            Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))
        );
        assert_eq!(rx.recv().unwrap(), Event::Tick);
        drop(rx);
        worker.join().unwrap();
    }

    #[test]
    fn pump_stops_on_terminal_error() {
        let clock = ManualClock::new(local(12, 0, 0));
        let (tx, rx) = mpsc::channel();
        pump(&tx, Duration::from_secs(60), &clock, |_| {
            Err(io::Error::other("closed"))
        });
        assert!(rx.try_recv().is_err());
    }
}
