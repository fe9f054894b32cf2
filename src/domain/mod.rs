// Domain layer: filter state, query model, ports (interfaces) and static
// reference data. No I/O here.

pub mod model;
pub mod ports;
pub mod reference;
