//! Assistant chat widget — conversation state machine and backend client.
//!
//! DESIGN
//! ======
//! The widget is split by concern so the state machine stays independent
//! of any rendering technology: `message`/`state` hold the data model,
//! `controller` owns the per-instance state machine and change
//! notification, `backend` wraps the HTTP contract behind a mockable
//! trait, `config` resolves the endpoint, and `format` is the pure
//! reply-to-markdown transform applied at display time.

pub mod backend;
pub mod config;
pub mod controller;
pub mod format;
pub mod message;
pub mod state;

pub use backend::{ChatBackend, HttpBackend};
pub use controller::ChatWidget;
