pub mod check;
pub mod laws;
pub mod worlds;
