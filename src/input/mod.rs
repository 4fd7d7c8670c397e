//! Input adapters for the fractal explorer.
//!
//! Translate raw pointer events from whatever shell hosts the explorer into
//! the core's selection values.

pub mod selection;
