//! # popfit guide
//!
//! This module is a standalone walkthrough of how popfit decides where a bubble goes.
//! It has no code; everything referenced lives in the crate root.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`PlacementRequest`](crate::PlacementRequest): the anchor, desired body size, screen
//!   bounds and clearances for one presentation
//! - [`Side`](crate::Side): one of the four places a bubble can sit relative to the anchor
//! - [`PlacementResult`](crate::PlacementResult): the chosen side plus body ("content") and
//!   arrow rects, all in screen space
//! - [`compute_placement`](crate::compute_placement): the solver
//!
//! Coordinates are a single flat screen space with y growing downward.
//!
//! ---
//!
//! ## Usable area
//!
//! The bubble must stay inside the *usable area*: the screen bounds shrunk by
//! `min_edge`, and shrunk again at the top and bottom by `safe_area` unless
//! `ignore_safe_area` is set. Horizontal safe-area insets are not applied.
//!
//! ## When does a side fit?
//!
//! A side fits only if all of these hold:
//!
//! 1. the full body size is no larger than the usable area on either axis
//! 2. anchor + body + arrow thickness along the placement axis fit the usable extent
//! 3. the literal gap between the anchor and the usable edge on that side holds
//!    body + arrow thickness
//!
//! The arrow thickness is always `arrow_size.height`: arrow sizes are given as if the
//! arrow pointed down and are rotated for left/right placements.
//!
//! ## Rects for a side
//!
//! The body takes the smallest of the space on that side, the desired size and
//! `max_content_size`. It is centered on the anchor along the cross axis, pushed back
//! if it overflows the far edge, then clamped to the near edge. The arrow is centered
//! on the anchor as well and kept inside the body span minus `arrow_padding`, so it never
//! overlaps a rounded corner. [`BubbleStyle::arrow_padding`](crate::BubbleStyle::arrow_padding)
//! derives that padding from the corner radius.
//!
//! ## Choosing a side
//!
//! 1. `preferred_sides` are tried in order; the first that fits wins
//! 2. otherwise every side is fit-tested:
//!    - exactly one fits: done
//!    - none fits: each side's clipped rect is computed; sides that only clip one axis
//!      are preferred, then the largest area, then the most square rect
//! 3. remaining ties keep the sides whose arrow sits closest to the body center
//! 4. final order: Top, Bottom, then Left or Right, whichever has more screen space
//!    beside the anchor (equal space picks Right)
//!
//! The solver never fails. When nothing fits, the result is the best clipped rect and the
//! presenter is expected to scroll or clip the body.
//!
//! ---
//!
//! ## Presenting the result
//!
//! - [`PlacementResult::whole_rect`](crate::PlacementResult::whole_rect) is the frame of the
//!   bubble view (body + arrow)
//! - `content_in_whole` / `arrow_in_whole` position the body and arrow inside that frame
//! - `anchor_point` is the pivot for a grow-from-anchor scale animation
//! - [`bubble_outline`](crate::bubble_outline) builds the background path in the same local
//!   coordinates; [`bubble_svg`](crate::bubble_svg) wraps it in an SVG document
//!
//! ## Menus
//!
//! [`GridLayout`](crate::GridLayout) sizes a grid of uniform menu items. Feed its
//! `content_size` into `PlacementRequest::content_size` and its `max_content_size` into
//! `PlacementRequest::max_content_size`.
