mod db;
mod detector;
mod device_resolver;
mod error;
mod helpers;
mod responsive;
mod types;

pub use detector::ResponsiveDetector;
pub use device_resolver::DeviceResolver;
pub use error::{Error, Result};
pub use responsive::{Responsive, ResponsiveOptions};
pub use types::*;
