pub mod duration;
pub mod model;
pub mod selector;
