//! Timeline rendering core: grid geometry, edge building, totals, remarks
//! and validation. No I/O happens below this module.

pub mod calculator;
pub mod grid;
pub mod logic;
pub mod validate;
