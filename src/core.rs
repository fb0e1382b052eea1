pub mod df;
pub mod diff;
pub mod reconcile;
