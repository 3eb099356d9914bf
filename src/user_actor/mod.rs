//! Staff accounts served from a `ResourceActor`.

pub mod entity;
