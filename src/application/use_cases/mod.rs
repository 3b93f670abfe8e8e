pub mod roster_loader;
pub mod roster_search;
