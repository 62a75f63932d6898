//! Transition lifecycle events.
//!
//! The controller emits events as the state machine moves: a transition
//! starting, direction reversals, individual tracks finishing, and the
//! moment all tracks have drained (settled). Hosts poll the queue after
//! driving the engine.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::track::{PanelState, TrackId, TrackKind};

/// Event emitted by the transition controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitionEvent {
    /// A transition started toward `state`; three tracks are now running.
    Started { state: PanelState },
    /// Every running track was reversed; `state` is the new committed
    /// target.
    Reversed { state: PanelState },
    /// One track finished playback and left the active set.
    TrackFinished { id: TrackId, kind: TrackKind },
    /// The last track finished; the panel is at rest in `state`.
    Settled { state: PanelState },
}

impl TransitionEvent {
    /// The committed state this event reports, if it carries one.
    pub fn state(&self) -> Option<PanelState> {
        match self {
            Self::Started { state } | Self::Reversed { state } | Self::Settled { state } => {
                Some(*state)
            }
            Self::TrackFinished { .. } => None,
        }
    }

    /// Whether this event marks the panel coming to rest.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled { .. })
    }
}

/// Queue of controller events, drained by the host.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<TransitionEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: TransitionEvent) {
        self.events.push_back(event);
    }

    /// Remove and return the oldest event.
    pub fn pop(&mut self) -> Option<TransitionEvent> {
        self.events.pop_front()
    }

    /// Look at the oldest event without removing it.
    pub fn peek(&self) -> Option<&TransitionEvent> {
        self.events.front()
    }

    /// Drain all pending events in order.
    pub fn drain(&mut self) -> impl Iterator<Item = TransitionEvent> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Drop all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accessors() {
        let started = TransitionEvent::Started {
            state: PanelState::Expanded,
        };
        assert_eq!(started.state(), Some(PanelState::Expanded));
        assert!(!started.is_settled());

        let finished = TransitionEvent::TrackFinished {
            id: TrackId(7),
            kind: TrackKind::Blur,
        };
        assert_eq!(finished.state(), None);

        let settled = TransitionEvent::Settled {
            state: PanelState::Collapsed,
        };
        assert!(settled.is_settled());
    }

    #[test]
    fn test_queue_preserves_order() {
        let mut queue = EventQueue::new();
        assert!(queue.is_empty());

        queue.push(TransitionEvent::Started {
            state: PanelState::Expanded,
        });
        queue.push(TransitionEvent::Reversed {
            state: PanelState::Collapsed,
        });
        assert_eq!(queue.len(), 2);

        assert!(matches!(
            queue.pop(),
            Some(TransitionEvent::Started { .. })
        ));
        assert!(matches!(
            queue.peek(),
            Some(TransitionEvent::Reversed { .. })
        ));
        assert!(matches!(
            queue.pop(),
            Some(TransitionEvent::Reversed { .. })
        ));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_queue_drain_and_clear() {
        let mut queue = EventQueue::new();
        queue.push(TransitionEvent::Settled {
            state: PanelState::Collapsed,
        });
        queue.push(TransitionEvent::TrackFinished {
            id: TrackId(1),
            kind: TrackKind::Frame,
        });

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(queue.is_empty());

        queue.push(TransitionEvent::Settled {
            state: PanelState::Expanded,
        });
        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_event_serialization() {
        let event = TransitionEvent::TrackFinished {
            id: TrackId(42),
            kind: TrackKind::Corner,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("track_finished"));
        assert!(json.contains("corner"));

        let parsed: TransitionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
