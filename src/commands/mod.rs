pub mod info;
pub mod predict;
