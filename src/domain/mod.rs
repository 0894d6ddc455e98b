// Domain layer: the shoe record and the ports (interfaces) the app depends on.
// No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
