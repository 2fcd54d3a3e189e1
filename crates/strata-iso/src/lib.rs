//! Isometric lattice: calendar cells to screen offsets, extruded prism faces,
//! and back-to-front draw ordering.
#![forbid(unsafe_code)]

pub mod depth;
pub mod face;
pub mod projector;

pub use depth::{Gridded, order};
pub use face::{FaceKind, PrismFaces};
pub use projector::{IsoProjector, prism_faces};
