use std::{
    fs,
    path::{Path, PathBuf},
};

pub mod error;

use error::{DeviceError, Result};

/// Directory scanned for indicator devices.
pub const DEVICE_DIR: &str = "/dev";

/// Device-name prefixes recognized as usb-serial adapters: `ttyUSB` on
/// Linux-style systems, `tty.usbserial` on Apple-style systems.
pub const DEVICE_NAME_PREFIXES: [&str; 2] = ["ttyUSB", "tty.usbserial"];

/// Selects the first name carrying a recognized usb-serial prefix, in listing
/// order.
///
/// Pure selection policy; [`locate`] applies it to an actual directory read.
pub fn select_device_name<I, S>(names: I) -> Option<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().find(|name| {
        DEVICE_NAME_PREFIXES
            .iter()
            .any(|prefix| name.as_ref().starts_with(prefix))
    })
}

/// Scans `dir` once and returns the full path of the first matching device.
///
/// Entries are considered in name order. One-shot and non-retrying: a device
/// plugged in after startup is never rediscovered.
pub fn locate(dir: &Path) -> Result<PathBuf> {
    let entries = fs::read_dir(dir).map_err(|source| DeviceError::DirUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    let name = select_device_name(names).ok_or_else(|| DeviceError::NoDeviceFound {
        path: dir.to_path_buf(),
    })?;

    Ok(dir.join(name))
}

#[cfg(test)]
mod tests;
