//! Snake Grid - board and snake primitives for a grid-based Snake game
//!
//! This library provides:
//! - A column-major color grid with checked accessors
//! - A compact snake encoding with movement and self-collision checks
//! - An ASCII text form for grids and a seedable random fill

pub mod game;
