pub mod champion;
pub mod filter;
pub mod ids;
pub mod item;
pub mod roster;
