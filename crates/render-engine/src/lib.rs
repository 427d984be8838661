//! Habilo Render Engine
//!
//! Turns a finished [`CurveBundle`](habilo_processing_core::CurveBundle)
//! into SVG figures. Nothing here computes angles; the bundle is drawn as is.
//!
//! ```text
//! CurveBundle ──┬── Time series ── Hip / Knee [/ Spine height] panels ──▶ <stem>-goniometry.svg
//!               └── Phase plane ── hip vs. knee, left and right ────────▶ <stem>-phase.svg
//! ```

pub mod figures;
pub mod layout;

pub use figures::*;
