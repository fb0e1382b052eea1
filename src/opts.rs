pub mod load_opts;

pub use crate::opts::load_opts::{IfExists, LoadMode, LoadOpts};
