pub mod edges;
pub mod remarks;
pub mod totals;
