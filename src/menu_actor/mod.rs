//! The predefined crêpe catalog served from a `ResourceActor`.

pub mod entity;
