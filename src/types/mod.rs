mod device;
mod request;

pub use device::*;
pub use request::*;
