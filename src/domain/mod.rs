//! Domain Layer
//!
//! Workspace model, the ports the core depends on, and the pure services
//! that resolve a workspace, select projects and plan version targets.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
