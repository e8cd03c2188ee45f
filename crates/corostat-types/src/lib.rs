pub mod membership;
pub mod ring;
pub mod status;

pub use membership::*;
pub use ring::*;
pub use status::*;
