//! Boundary traits for the host runtime.
//!
//! The game never talks to a renderer or an input system directly. A host
//! (game engine, terminal UI, test harness) implements these traits and
//! the [`Session`](super::Session) wires them to the director.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{CameraPose, CupId, Vec3};
use crate::cups::Highlight;

/// Host-side identifier of a spawned object, as reported by picking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self.0)
    }
}

/// A cup object living in the host scene.
pub trait SpatialHandle {
    /// Identifier the host uses in pointer events for this object.
    fn object_id(&self) -> ObjectId;

    fn set_position(&mut self, position: Vec3);

    fn set_highlight(&mut self, mode: Highlight);
}

/// Object instantiation and camera placement.
pub trait SceneHost {
    type Handle: SpatialHandle;

    /// Instantiate the visual for `cup` at `position` with Euler `rotation`
    /// (degrees).
    fn spawn_cup(&mut self, cup: CupId, position: Vec3, rotation: Vec3) -> Self::Handle;

    fn place_camera(&mut self, pose: CameraPose);
}

/// Pointer and keyboard input, already resolved to picked objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerEnter(ObjectId),
    PointerExit(ObjectId),
    PointerClick(ObjectId),
    /// The manual "shuffle now" key.
    ShuffleRequested,
}

/// Anything that can hand over queued input events.
pub trait InputSource {
    fn poll_event(&mut self) -> Option<InputEvent>;
}

impl InputSource for VecDeque<InputEvent> {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pop_front()
    }
}

/// A text widget showing the score.
pub trait ScoreDisplay {
    fn show_score(&mut self, text: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue: VecDeque<InputEvent> = VecDeque::new();
        queue.push_back(InputEvent::PointerEnter(ObjectId(1)));
        queue.push_back(InputEvent::ShuffleRequested);

        assert_eq!(queue.poll_event(), Some(InputEvent::PointerEnter(ObjectId(1))));
        assert_eq!(queue.poll_event(), Some(InputEvent::ShuffleRequested));
        assert_eq!(queue.poll_event(), None);
    }

    #[test]
    fn test_object_id_display() {
        assert_eq!(ObjectId(7).to_string(), "Object(7)");
    }
}
