pub mod consts;
pub mod location;
pub mod map;
