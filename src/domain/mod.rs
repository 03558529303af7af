// Domain layer: calendar models and the read-only port consumers depend on.

pub mod model;
pub mod ports;
pub mod raw;
