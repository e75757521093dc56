pub mod catalog;
pub mod constants;
pub mod orbit;
pub mod rig;
pub mod state;
pub mod texture;

pub use catalog::*;
pub use constants::*;
pub use orbit::*;
pub use rig::*;
pub use state::*;
pub use texture::*;
