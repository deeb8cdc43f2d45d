pub mod assets;
pub mod compute;
pub mod config;
pub mod entities;
pub mod geometry;
pub mod level;
pub mod menu;
pub mod physics;
