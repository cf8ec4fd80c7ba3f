/// Default low battery level in percent.
pub const DEFAULT_LOW_LEVEL: u8 = 20;

/// Default critical battery level in percent.
pub const DEFAULT_CRITICAL_LEVEL: u8 = 5;

/// Low and critical thresholds in percent.
///
/// Callers are expected to keep `critical <= low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdLevels {
    /// Low battery level.
    pub low: u8,
    /// Critical battery level.
    pub critical: u8,
}

impl Default for ThresholdLevels {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW_LEVEL,
            critical: DEFAULT_CRITICAL_LEVEL,
        }
    }
}
