//! Host boundary: scene, input and display traits plus the session that
//! connects them to the game.

pub mod session;
pub mod traits;

pub use session::Session;
pub use traits::{InputEvent, InputSource, ObjectId, ScoreDisplay, SceneHost, SpatialHandle};
