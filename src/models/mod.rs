pub mod conditions;
pub mod grid;
pub mod observation;
pub mod period;
pub mod sky;
pub mod waves;
pub mod wind;

pub use conditions::*;
pub use grid::*;
pub use observation::*;
pub use period::*;
pub use sky::*;
pub use waves::*;
pub use wind::*;
