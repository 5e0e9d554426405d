//! Core of a lane-crossing arcade game: get the player across the board
//! without touching the enemies streaming along the middle rows.

pub mod compute;
pub mod config;
pub mod entities;
pub mod input;
pub mod render;
