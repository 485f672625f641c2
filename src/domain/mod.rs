// Domain layer: the report model and the host port. No external dependencies.

pub mod model;
pub mod ports;
