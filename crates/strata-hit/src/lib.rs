//! Pointer interaction over a rendered frame: which prism is under the cursor,
//! which day it belongs to, and what the tooltip should say.
#![forbid(unsafe_code)]

pub mod mapper;
pub mod tooltip;

pub use mapper::{HitMapper, HoverInfo, HoverState};
pub use tooltip::{TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y, Tooltip};
