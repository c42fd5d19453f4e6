// Domain layer: the mark model and the ports adapters implement.

pub mod model;
pub mod ports;
