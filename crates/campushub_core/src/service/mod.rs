//! Console use-case services.
//!
//! # Responsibility
//! - Orchestrate store access and collection mutations behind one owned
//!   state container.
//! - Keep the render layer decoupled from persistence details.

pub mod console;
