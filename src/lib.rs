//! popfit places popup bubbles (tooltips, menus) around an anchor rect.
//!
//! Given the anchor, the size the bubble body wants, the screen bounds and a few
//! clearances, popfit decides which side of the anchor the bubble goes on and returns
//! the exact body and arrow rects (`PlacementResult`).
//!
//! # Pipeline overview
//!
//! 1. **Describe**: fill a [`PlacementRequest`] (programmatically or from JSON)
//! 2. **Solve**: [`compute_placement`] picks a side and computes the rects
//! 3. **Draw** (optional): [`bubble_outline`] / [`bubble_svg`] turn the result into a
//!    bubble background path
//!
//! Menus made of uniform items can size themselves first with [`GridLayout`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total solver**: placement never fails; bad geometry yields degenerate rects.
//! - **Deterministic**: the same request always produces the same result.
//! - **No platform glue**: screen metrics come in as plain numbers.
//!
//! For a longer walkthrough, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bubble;
mod foundation;
mod menu;
mod placement;

/// Standalone documentation of the placement rules and how the pieces fit together.
pub mod guide;

pub use bubble::path::{bubble_outline, bubble_svg};
pub use bubble::style::BubbleStyle;
pub use foundation::core::{BezPath, EdgeInsets, Insets, Point, Rect, Size, rect_xywh};
pub use foundation::error::{PopfitError, PopfitResult};
pub use menu::grid::GridLayout;
pub use placement::request::{PlacementRequest, unbounded_size};
pub use placement::result::{PlacementReport, PlacementResult};
pub use placement::side::Side;
pub use placement::solver::compute_placement;
