pub mod dashboard;
pub mod intro;
pub mod player;
pub mod result;
