// Domain layer: models and ports. Adapters and services depend on this, never the other way round.

pub mod model;
pub mod ports;
