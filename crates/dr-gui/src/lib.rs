//! Desktop window for the day reachability calculator.
//!
//! A macroquad application: pick a number from a dropdown, check how many
//! calendar days reach it, browse the distribution as a bar chart, and
//! export the whole table to CSV. Light and dark palettes are switchable.

pub mod app;
pub mod heading;
pub mod input;
pub mod screen;
pub mod theme;
pub mod widget;
