pub mod action;

pub use action::{ActionRecord, CompositePermission};
