pub mod profile;
pub mod status;

pub use profile::*;
pub use status::*;
