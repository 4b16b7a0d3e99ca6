use crate::inference_pipeline::common::error::{ClassifyError, Result};
use crate::inference_pipeline::device::types::Device;

pub trait DeviceEnumerator {
    fn list_devices(&self) -> Result<Vec<Device>>;
}

/// Returns the first attached device, or `ClassifyError::NoDevice`.
pub fn first_device(enumerator: &dyn DeviceEnumerator) -> Result<Device> {
    enumerator
        .list_devices()?
        .into_iter()
        .next()
        .ok_or(ClassifyError::NoDevice)
}

/// One `"<index> <kind> <path>"` line per device.
pub fn render_device_list(devices: &[Device]) -> Vec<String> {
    devices
        .iter()
        .enumerate()
        .map(|(i, device)| format!("{} {} {}", i, device.kind, device.path))
        .collect()
}
