//! Network listener and per-connection dispatch.

pub mod listener;
