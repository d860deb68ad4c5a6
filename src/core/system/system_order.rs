//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. Input (pointer, wheel, keyboard and button presses turned into site actions)
//! 2. Page (layout/scroll first, then navigation, reveals, loading gate, presentation cursor)
//! 3. Scene (3D clocks, particles, droplets, sway, cameras)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet; // raw input -> SiteAction events

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PageSet; // 2D page state reacting to actions

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SceneSet; // 3D scene animation

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct LayoutSet; // page measurement + scroll offset; runs first inside PageSet
