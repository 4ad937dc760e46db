//! Generic data structures and algorithm.
//! Each of these mods is envisioned to be possibly publishable as its own crate.

pub mod arena;
