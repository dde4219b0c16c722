//! Orbit Hopper library
//!
//! A small arcade game: steer a ship between spinning planets, ride their
//! gravity, launch off their surfaces with stored boost, and collect stars.
//! The simulation core is plain data plus free functions; the Bevy systems
//! in [`simulation`], [`player`], [`rendering`] and [`menu`] drive it.

pub mod body;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod math;
pub mod menu;
pub mod orientation;
pub mod physics;
pub mod player;
pub mod rendering;
pub mod simulation;
pub mod stars;
