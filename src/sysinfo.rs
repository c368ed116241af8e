//! Host system description prepended to reports on request.
//!
//! The report engine only sees the finished text block; everything here is
//! about producing it.

use log::debug;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SysInfoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{field} not found in {path}")]
    MissingField { path: &'static str, field: &'static str },

    #[error("system information is not supported on this platform")]
    Unsupported,
}

/// Source of the system information block.
pub trait SystemInfoProvider {
    /// Processor model, CPU count, total memory, and OS.
    fn basic(&self) -> Result<String, SysInfoError>;
    /// Basic information plus clock speed, cache size, and kernel version.
    fn detailed(&self) -> Result<String, SysInfoError>;
}

/// Processor details gathered from the CPU probe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuInfo {
    pub model: String,
    pub mhz: String,
    pub cache: String,
    pub count: usize,
}

impl CpuInfo {
    fn model_label(&self) -> &str {
        if self.model.is_empty() { "unknown" } else { &self.model }
    }
}

/// Everything the text blocks are built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemInfo {
    pub cpu: CpuInfo,
    pub mem_total_kb: u64,
    pub os: String,
    pub kernel: String,
}

impl SystemInfo {
    pub fn basic_text(&self) -> String {
        format!(
            "Processor: {}\nCPUs: {}\nRAM: {}\nOS: {}\n",
            self.cpu.model_label(),
            self.cpu.count,
            format_kb(self.mem_total_kb),
            self.os
        )
    }

    pub fn detailed_text(&self) -> String {
        format!(
            "Processor: {}\nSpeed: {} MHz\nCache: {}\nCPUs: {}\nRAM: {}\nOS: {}\nKernel: {}\n",
            self.cpu.model_label(),
            self.cpu.mhz,
            self.cpu.cache,
            self.cpu.count,
            format_kb(self.mem_total_kb),
            self.os,
            self.kernel
        )
    }
}

/// Reads the running host's `/proc` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSystemInfo;

impl HostSystemInfo {
    #[cfg(target_os = "linux")]
    pub fn probe(&self) -> Result<SystemInfo, SysInfoError> {
        debug!("Probing host system information");
        let cpu = parse_cpuinfo(&read_proc("/proc/cpuinfo")?);
        if cpu.count == 0 {
            return Err(SysInfoError::MissingField { path: "/proc/cpuinfo", field: "processor" });
        }
        if cpu.model.is_empty() {
            debug!("No processor model in /proc/cpuinfo");
        }
        let mem_total_kb = parse_mem_total(&read_proc("/proc/meminfo")?)
            .ok_or(SysInfoError::MissingField { path: "/proc/meminfo", field: "MemTotal" })?;
        let os = read_proc("/proc/sys/kernel/ostype")?.trim().to_string();
        let kernel = read_proc("/proc/sys/kernel/osrelease")?.trim().to_string();
        Ok(SystemInfo { cpu, mem_total_kb, os, kernel })
    }

    #[cfg(not(target_os = "linux"))]
    pub fn probe(&self) -> Result<SystemInfo, SysInfoError> {
        debug!("System information probe unsupported on this platform");
        Err(SysInfoError::Unsupported)
    }
}

impl SystemInfoProvider for HostSystemInfo {
    fn basic(&self) -> Result<String, SysInfoError> {
        Ok(self.probe()?.basic_text())
    }

    fn detailed(&self) -> Result<String, SysInfoError> {
        Ok(self.probe()?.detailed_text())
    }
}

#[cfg(target_os = "linux")]
fn read_proc(path: &str) -> Result<String, SysInfoError> {
    std::fs::read_to_string(path).map_err(|source| SysInfoError::Read { path: path.to_string(), source })
}

/// Parse `/proc/cpuinfo` content. The first processor entry supplies the
/// model, speed, and cache; every entry counts toward the CPU total.
///
/// ARM kernels often omit `model name`; the model then falls back to
/// `Hardware`, `Processor`, or `CPU part`, in that order.
pub fn parse_cpuinfo(content: &str) -> CpuInfo {
    let mut info = CpuInfo::default();
    let mut fallbacks: [Option<String>; 3] = [None, None, None];
    for line in content.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "processor" => info.count += 1,
            "model name" if info.model.is_empty() => info.model = value.to_string(),
            "cpu MHz" if info.mhz.is_empty() => info.mhz = value.to_string(),
            "cache size" if info.cache.is_empty() => info.cache = value.to_string(),
            "Hardware" if fallbacks[0].is_none() => fallbacks[0] = Some(value.to_string()),
            "Processor" if fallbacks[1].is_none() => fallbacks[1] = Some(value.to_string()),
            "CPU part" if fallbacks[2].is_none() => fallbacks[2] = Some(value.to_string()),
            _ => {}
        }
    }
    if info.model.is_empty()
        && let Some(model) = fallbacks.into_iter().flatten().find(|m| !m.is_empty())
    {
        info.model = model;
    }
    info
}

/// Extract `MemTotal` in kB from `/proc/meminfo` content.
pub fn parse_mem_total(content: &str) -> Option<u64> {
    content
        .lines()
        .find(|line| line.starts_with("MemTotal:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|kb| kb.parse().ok())
}

fn format_kb(kb: u64) -> String {
    format!("{:.2} GiB", kb as f64 / (1024.0 * 1024.0))
}
