// Domain layer: models and ports. Adapters and the dialog controllers depend on these, never the reverse.

pub mod model;
pub mod ports;
