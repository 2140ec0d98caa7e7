// Domain layer: pet records, growth formulas and ports. No I/O here.

pub mod growth;
pub mod model;
pub mod ports;
