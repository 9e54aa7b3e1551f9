pub mod archetype;
pub mod dataset;
pub mod win_rate;

pub use archetype::*;
pub use dataset::*;
pub use win_rate::*;
