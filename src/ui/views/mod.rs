pub mod gc;
pub mod wipe;
