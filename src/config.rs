pub mod merge;
pub mod model;
pub mod screen;
pub mod sounds;
pub mod source;
pub mod workspace;
