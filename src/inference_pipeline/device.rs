//! Accelerator device discovery
//!
//! Device enumeration is modeled as an explicit handle so callers decide
//! where devices come from instead of relying on process-wide state.

mod enumerator;
mod sysfs_enumerator;
pub mod types;


pub use enumerator::{first_device, render_device_list, DeviceEnumerator};
pub use sysfs_enumerator::SysfsDeviceEnumerator;
pub use types::{Device, DeviceKind};
