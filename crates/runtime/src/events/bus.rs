//! Broadcast event bus.

use tokio::sync::broadcast;

use super::MatchEvent;

/// Fan-out channel for [`MatchEvent`]s.
///
/// Publishing never blocks and never fails: events sent while nobody is
/// subscribed are dropped. Cloning yields a handle onto the same channel.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<MatchEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Creates a new event bus with the given buffer capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn publish(&self, event: MatchEvent) {
        let kind = event.kind();
        if self.sender.send(event).is_err() {
            // No subscribers - this is normal, not an error
            tracing::trace!("No subscribers for {}", kind);
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MatchEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_core::{InningNumber, Side};
    use tokio::sync::broadcast::error::TryRecvError;

    fn closed(runs: u32) -> MatchEvent {
        MatchEvent::InningClosed {
            inning: InningNumber::First,
            batting_side: Side::A,
            runs,
            target: Some(runs + 1),
        }
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish(closed(3));
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn every_subscriber_sees_events_in_order() {
        let bus = EventBus::new();
        let mut first = bus.subscribe();
        let mut second = bus.clone().subscribe();

        bus.publish(closed(1));
        bus.publish(closed(2));

        for rx in [&mut first, &mut second] {
            assert_eq!(rx.try_recv().unwrap(), closed(1));
            assert_eq!(rx.try_recv().unwrap(), closed(2));
            assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
        }
    }
}
