// Domain layer: models and ports. Host specifics live in adapters.

pub mod model;
pub mod ports;
