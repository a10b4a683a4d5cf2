//! Swipey Bird - a swipe-controlled side-scroller
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, phases)
//! - `driver`: Frame loop wiring the simulation to input, storage and output
//! - `renderer`: Draw lists and the Canvas 2D backend
//! - `platform`: Pointer to gesture translation
//! - `persistence`: Key/value storage for the profile
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod driver;
pub mod persistence;
pub mod platform;
pub mod profile;
pub mod renderer;
pub mod share;
pub mod sim;
pub mod skins;
pub mod tuning;

pub use driver::{Driver, Presenter};
pub use profile::Profile;
pub use skins::{Skin, SkinBrowser, SkinCatalog, SkinChoice};
pub use tuning::Tuning;
