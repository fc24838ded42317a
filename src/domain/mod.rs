// Domain layer: icon models and ports (interfaces).

pub mod model;
pub mod ports;
