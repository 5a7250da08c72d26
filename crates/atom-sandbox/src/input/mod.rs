pub mod controller;
pub mod keys;
pub mod layout;
pub mod queue;
