//! Device discovery through the Linux device tree.
//!
//! PCI accelerators show up as `/dev/apex_N` nodes. USB accelerators are found
//! by matching vendor and product IDs under `/sys/bus/usb/devices`.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::inference_pipeline::common::error::Result;
use crate::inference_pipeline::device::enumerator::DeviceEnumerator;
use crate::inference_pipeline::device::types::{Device, DeviceKind};

const PCI_NODE_PREFIX: &str = "apex_";

/// Vendor/product pairs of USB accelerators, before and after firmware load.
const USB_IDS: &[(&str, &str)] = &[("1a6e", "089a"), ("18d1", "9302")];

pub struct SysfsDeviceEnumerator {
    root: PathBuf,
}

impl Default for SysfsDeviceEnumerator {
    fn default() -> Self {
        Self::with_root("/")
    }
}

impl SysfsDeviceEnumerator {
    /// Scans `root/dev` and `root/sys/bus/usb/devices` instead of the real filesystem root.
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn pci_devices(&self) -> Result<Vec<Device>> {
        let dev_dir = self.root.join("dev");
        let mut devices = Vec::new();
        for name in entry_names(&dev_dir)? {
            if name.starts_with(PCI_NODE_PREFIX) {
                devices.push(Device {
                    kind: DeviceKind::Pci,
                    path: dev_dir.join(&name).display().to_string(),
                });
            }
        }
        Ok(devices)
    }

    fn usb_devices(&self) -> Result<Vec<Device>> {
        let usb_dir = self.root.join("sys/bus/usb/devices");
        let mut devices = Vec::new();
        for name in entry_names(&usb_dir)? {
            let entry = usb_dir.join(&name);
            let (Some(vendor), Some(product)) = (
                read_id(&entry.join("idVendor")),
                read_id(&entry.join("idProduct")),
            ) else {
                continue;
            };
            trace!(device = %name, vendor = %vendor, product = %product, "USB device");
            if USB_IDS.iter().any(|&(v, p)| v == vendor && p == product) {
                devices.push(Device {
                    kind: DeviceKind::Usb,
                    path: entry.display().to_string(),
                });
            }
        }
        Ok(devices)
    }
}

impl DeviceEnumerator for SysfsDeviceEnumerator {
    fn list_devices(&self) -> Result<Vec<Device>> {
        let mut devices = self.pci_devices()?;
        devices.extend(self.usb_devices()?);
        debug!("Found {} accelerator device(s)", devices.len());
        Ok(devices)
    }
}

/// Sorted entry names of `dir`; a missing directory has no entries.
fn entry_names(dir: &Path) -> Result<Vec<String>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut names = Vec::new();
    for entry in entries {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

fn read_id(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|id| id.trim().to_ascii_lowercase())
}
