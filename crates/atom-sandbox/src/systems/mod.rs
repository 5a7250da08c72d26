pub mod shells;
pub mod snapshot;
pub mod tick;
