//! Portfolio content — declarative data and plain-text rendering.
//!
//! DESIGN
//! ======
//! Content is static typed data; rendering is iteration and joining,
//! nothing else. The one piece of behavior anywhere near this module is
//! the `interactive` project flag, which tells the host which project
//! demo opens the assistant widget.

pub mod data;
pub mod render;
