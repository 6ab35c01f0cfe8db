mod functions;
mod store_handle;

pub use functions::*;
pub use store_handle::*;
