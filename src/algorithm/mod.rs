pub mod connectivity;
pub mod deadlock;
pub mod groups;
pub mod solver;
