//! PDF emission of laid-out page sketches.

pub mod emit;
