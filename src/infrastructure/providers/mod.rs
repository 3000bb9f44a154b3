pub mod local_source;
pub mod remote_source;

pub use local_source::*;
pub use remote_source::*;
