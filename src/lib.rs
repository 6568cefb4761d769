//! # grid-template
//!
//! A mutable, indexable matrix for building CSS `grid-template` property
//! values.
//!
//! A [`template::GridTemplate`] starts as a 1x1 grid of named areas and track
//! sizes, grows by inserting rows and columns at arbitrary positions
//! (including negative logical indexes and the one-past-end append slot), and
//! derives the formatted, column-aligned property value on demand. Area names
//! and track sizes are opaque strings; parsing and validating CSS is out of
//! scope, as is computing actual track sizing.
//!
//! ## Core Systems
//!
//! - **[`index`]** — Logical index resolution: axes, insertion positions, out-of-range errors
//! - **[`template`]** — The grid matrix: construction, insertion, rendering, layout projection

// Index resolution
pub mod index;

// The matrix
pub mod template;
