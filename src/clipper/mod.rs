//! Frustum clipping.
//!
//! Triangles are clipped in homogeneous clip space, after projection and
//! before the perspective divide, against six fixed planes. See
//! [`clip_space`] for the plane conventions.

pub mod clip_space;

pub use clip_space::{ClipPlane, ClipSpaceClipper};
