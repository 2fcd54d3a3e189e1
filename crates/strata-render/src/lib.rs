//! Stacked-prism rendering of a fused calendar into paint-ordered face polygons.
#![forbid(unsafe_code)]

mod constants;
pub mod frame;
pub mod palette;
pub mod prism;
pub mod scale;
pub mod svg;

pub use frame::{DrawPolygon, Frame, FrameOptions, PrismId, render_frame};
pub use palette::{Palette, ShadedColors, Shading};
pub use prism::{PrismKind, RenderPrism, render_record};
pub use scale::HeightScale;
pub use svg::{SvgOptions, write_svg};
