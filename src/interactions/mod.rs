//! Component interaction handlers, routed from the event handler by
//! custom_id family.

pub mod ids;
pub mod ladder_handler;
pub mod reset_handler;
