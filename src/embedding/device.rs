use candle_core::Device;

/// Compute device for the sentence encoder.
///
/// Tries Metal, then CUDA, when the matching cargo feature is compiled in. Any
/// failure falls through to the CPU.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => return device,
        Err(e) => tracing::warn!(error = %e, "Metal unavailable for sentence encoding"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => return device,
        Err(e) => tracing::warn!(error = %e, "CUDA unavailable for sentence encoding"),
    }

    Device::Cpu
}

pub fn device_label(device: &Device) -> &'static str {
    match device {
        Device::Cpu => "cpu",
        Device::Cuda(_) => "cuda",
        Device::Metal(_) => "metal",
    }
}
