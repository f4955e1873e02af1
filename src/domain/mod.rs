// Domain layer: plain records parsed from the data files, and the ports the
// pipeline is built against.

pub mod model;
pub mod ports;
