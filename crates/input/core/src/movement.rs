//! Movement intent throttling.
//!
//! At most one move intent is pending per tick (latest wins). A destination is
//! only sent when more than the send interval has elapsed since the last
//! accepted send; targeted action sends push that stamp into the future so the
//! character does not walk onto the entity that was just clicked.

use std::time::Duration;

/// Device that produced a move intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveSource {
    /// Held pointer button; the destination is picked along the pointer ray.
    Pointer,
    /// Analog stick; the destination is projected straight down from the aim.
    Analog,
}

#[derive(Clone, Debug)]
pub struct MovementThrottle {
    interval: Duration,
    pending: Option<MoveSource>,
    last_sent: Option<Duration>,
}

impl MovementThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            last_sent: None,
        }
    }

    /// Marks a move as pending; overwrites an earlier source in the same tick.
    pub fn request(&mut self, source: MoveSource) {
        self.pending = Some(source);
    }

    pub fn pending(&self) -> Option<MoveSource> {
        self.pending
    }

    /// Drops the pending move without sending.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Suppresses moves until `until + interval` has passed.
    pub fn hold_off(&mut self, until: Duration) {
        self.last_sent = Some(until);
    }

    /// True when more than the interval has elapsed since the last stamp.
    pub fn is_ready(&self, now: Duration) -> bool {
        match self.last_sent {
            None => true,
            Some(last) => now.checked_sub(last).is_some_and(|gap| gap > self.interval),
        }
    }

    /// Takes the pending move if it may be sent at `now`. The pending flag is
    /// cleared either way.
    pub fn take_ready(&mut self, now: Duration) -> Option<MoveSource> {
        let source = self.pending.take()?;
        if self.is_ready(now) {
            Some(source)
        } else {
            tracing::trace!(%source, ?now, "move throttled");
            None
        }
    }

    /// Stamps an accepted send.
    pub fn record_send(&mut self, now: Duration) {
        self.last_sent = Some(now);
    }

    pub fn last_sent(&self) -> Option<Duration> {
        self.last_sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn first_move_is_ready() {
        let mut throttle = MovementThrottle::new(ms(40));
        throttle.request(MoveSource::Pointer);
        assert_eq!(throttle.take_ready(ms(0)), Some(MoveSource::Pointer));
    }

    #[test]
    fn latest_source_wins() {
        let mut throttle = MovementThrottle::new(ms(40));
        throttle.request(MoveSource::Pointer);
        throttle.request(MoveSource::Analog);
        assert_eq!(throttle.pending(), Some(MoveSource::Analog));
    }

    #[test]
    fn throttled_move_is_dropped() {
        let mut throttle = MovementThrottle::new(ms(40));
        throttle.record_send(ms(1000));
        throttle.request(MoveSource::Pointer);
        assert_eq!(throttle.take_ready(ms(1010)), None);
        assert_eq!(throttle.pending(), None);

        // exactly one interval is still too early
        throttle.request(MoveSource::Pointer);
        assert_eq!(throttle.take_ready(ms(1040)), None);

        throttle.request(MoveSource::Pointer);
        assert_eq!(throttle.take_ready(ms(1050)), Some(MoveSource::Pointer));
    }

    #[test]
    fn hold_off_stamp_in_the_future_blocks() {
        let mut throttle = MovementThrottle::new(ms(40));
        throttle.hold_off(ms(450));
        assert!(!throttle.is_ready(ms(200)));
        assert!(!throttle.is_ready(ms(490)));
        assert!(throttle.is_ready(ms(491)));
    }
}
