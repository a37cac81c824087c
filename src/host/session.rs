//! Glue between a host runtime and the director.
//!
//! A `Session` owns the director, the score tracker and the host's cup
//! handles. The host calls [`Session::frame`] once per rendered frame with
//! its input queue and the frame time; the session routes input, advances
//! the game and pushes changed positions and highlights back out.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::traits::{InputEvent, InputSource, ObjectId, SceneHost, SpatialHandle};
use crate::core::{CupId, Vec3};
use crate::cups::Highlight;
use crate::director::{GameDirector, GameEvent};
use crate::score::ScoreTracker;

pub struct Session<S: SceneHost> {
    host: S,
    director: GameDirector,
    score: ScoreTracker,
    handles: SmallVec<[S::Handle; 4]>,
    /// Picked object -> cup.
    lookup: FxHashMap<ObjectId, CupId>,
    /// Last values pushed to each handle.
    synced: SmallVec<[(Vec3, Highlight); 4]>,
}

impl<S: SceneHost> Session<S> {
    #[must_use]
    pub fn new(host: S, director: GameDirector, score: ScoreTracker) -> Self {
        Self {
            host,
            director,
            score,
            handles: SmallVec::new(),
            lookup: FxHashMap::default(),
            synced: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn director(&self) -> &GameDirector {
        &self.director
    }

    /// Mutable access for scripted hosts (forcing the correct cup, etc.).
    pub fn director_mut(&mut self) -> &mut GameDirector {
        &mut self.director
    }

    #[must_use]
    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    #[must_use]
    pub fn host(&self) -> &S {
        &self.host
    }

    #[must_use]
    pub fn handles(&self) -> &[S::Handle] {
        &self.handles
    }

    /// Cup behind a host object, if it is one of ours.
    #[must_use]
    pub fn cup_for(&self, object: ObjectId) -> Option<CupId> {
        self.lookup.get(&object).copied()
    }

    /// Spawn the cups (first call only), place the camera and begin
    /// shuffling.
    pub fn start(&mut self) -> Vec<GameEvent> {
        if self.handles.is_empty() {
            self.spawn_cups();
        }
        self.host.place_camera(self.director.config().camera);
        self.director.start();
        self.sync(true);
        self.director.take_events()
    }

    /// Route all pending input, advance one frame and sync the scene.
    pub fn frame<I: InputSource + ?Sized>(&mut self, input: &mut I, dt: f32) -> Vec<GameEvent> {
        while let Some(event) = input.poll_event() {
            self.handle_input(event);
        }
        self.director.update(dt);
        self.sync(false);
        self.director.take_events()
    }

    /// Apply one input event. Events for unknown objects are dropped.
    pub fn handle_input(&mut self, event: InputEvent) {
        let object = match event {
            InputEvent::ShuffleRequested => {
                self.director.request_shuffle();
                return;
            }
            InputEvent::PointerEnter(o) | InputEvent::PointerExit(o) | InputEvent::PointerClick(o) => o,
        };
        let Some(cup) = self.cup_for(object) else {
            log::debug!("Input for unknown {} dropped", object);
            return;
        };

        match event {
            InputEvent::PointerEnter(_) => self.director.pointer_enter(cup),
            InputEvent::PointerExit(_) => self.director.pointer_exit(cup),
            InputEvent::PointerClick(_) => {
                self.director.pointer_click(cup, &mut self.score);
            }
            InputEvent::ShuffleRequested => {}
        }
    }

    fn spawn_cups(&mut self) {
        let rotation = self.director.config().cup_rotation;
        for cup in self.director.cups() {
            let handle = self.host.spawn_cup(cup.id(), cup.position(), rotation);
            self.lookup.insert(handle.object_id(), cup.id());
            self.synced.push((cup.position(), cup.highlight()));
            self.handles.push(handle);
        }
        log::debug!("Spawned {} cups", self.handles.len());
    }

    fn sync(&mut self, force: bool) {
        let cups = self.director.cups();
        for ((cup, handle), last) in cups.iter().zip(self.handles.iter_mut()).zip(self.synced.iter_mut()) {
            if force || last.0 != cup.position() {
                handle.set_position(cup.position());
                last.0 = cup.position();
            }
            if force || last.1 != cup.highlight() {
                handle.set_highlight(cup.highlight());
                last.1 = cup.highlight();
            }
        }
    }
}

impl<S: SceneHost> std::fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("director", &self.director)
            .field("score", &self.score)
            .field("handles", &self.handles.len())
            .finish()
    }
}
