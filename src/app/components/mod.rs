//! Shared UI components for the portal.

pub mod character;
pub mod flame;
pub mod layout;
pub mod nav;
pub mod scene;
pub mod video;

pub use character::CharacterProfile;
pub use flame::{FlameEffect, Intensity};
pub use layout::Layout;
pub use nav::Nav;
pub use scene::AnimatedScene;
pub use video::VideoPlayer;
