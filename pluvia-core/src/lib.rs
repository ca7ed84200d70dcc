//! Pluvia answers one question: will it rain along a point-to-point route
//! during the most recent radar observation window?
//!
//! The engine consumes an ordered sequence of time-stamped radar frames
//! covering a fixed geographic bounding box, fuses them into a single
//! composite that keeps every precipitation cell observed across the window,
//! then samples that composite along the straight line between two
//! coordinates to produce an intensity verdict per route.
//!
//! # Pipeline overview
//!
//! 1. **Composite**: `&[Frame] -> Composite` (first-writer-wins union of
//!    precipitation across the window)
//! 2. **Project**: `GeoPoint + BoundingBox -> pixel coordinates` (linear,
//!    y-inverted, unclamped)
//! 3. **Sample**: Bresenham walk of the composite along the route segment
//! 4. **Evaluate**: sampled pixels -> [`RouteVerdict`]
//!
//! [`check_routes`] runs all four stages for a batch of routes;
//! [`evaluate_route`] covers stages 2–4 for one route against a shared
//! composite.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: every stage is a pure function of its
//!   inputs; re-evaluating a route against an unchanged composite yields an
//!   identical verdict.
//! - **No IO in the engine**: frame acquisition and geocoding are upstream
//!   collaborators; byte-level decode/encode is confined to [`decode_frame`]
//!   and [`encode_png`] at the boundary.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod classify;
mod codec;
mod composite;
mod foundation;
mod geo;
mod pipeline;
mod render;
mod sample;
mod verdict;

pub use classify::{IntensityTier, classify, is_rain};
pub use codec::{decode_frame, encode_png};
pub use composite::{Composite, composite};
pub use foundation::core::{Frame, Raster, Rgb8};
pub use foundation::error::{PluviaError, PluviaResult};
pub use geo::{BoundingBox, GeoPoint, Route, project};
pub use pipeline::{EvalThreading, RouteOutcome, WindowReport, check_routes, evaluate_route};
pub use render::annotate_route;
pub use sample::sample_line;
pub use verdict::{RouteVerdict, evaluate};
