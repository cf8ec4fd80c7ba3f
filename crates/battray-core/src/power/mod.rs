mod apm;
mod sample;
mod source;
mod sysfs;

#[cfg(test)]
pub(crate) use {apm::parse_apm_line, sysfs::parse_status};

pub use {
    apm::ApmReader,
    sample::{PowerSample, RawStatus, TimeUnit},
    source::{PowerSource, open_power_source},
    sysfs::SysfsReader,
};
