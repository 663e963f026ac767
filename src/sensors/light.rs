//! Photocell ambient-light sensor.
//!
//! The photocell sits in a resistive divider on an ADC input.  The driver
//! wraps a read closure (the ADC channel lives in the hardware adapter) and
//! scales the raw sample onto the 16-bit range the thresholds are written
//! in, so a 12-bit ESP32 reading and a 16-bit reading compare the same way.
//!
//! No filtering: a stuck or noisy photocell is not detected.

/// One bounded ambient-light sample, 0 (dark) to 65535 (bright).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LightReading(u16);

impl LightReading {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u16 {
        self.0
    }
}

pub struct LightSensor<R> {
    read_raw: R,
    /// Left shift applied to raw samples (4 for a 12-bit ADC).
    scale_shift: u32,
}

impl<R> LightSensor<R>
where
    R: FnMut() -> u16,
{
    /// `adc_bits` is the resolution of the raw sample (1..=16).
    pub fn new(read_raw: R, adc_bits: u32) -> Self {
        let adc_bits = adc_bits.clamp(1, 16);
        Self {
            read_raw,
            scale_shift: 16 - adc_bits,
        }
    }

    pub fn read(&mut self) -> LightReading {
        let raw = u32::from((self.read_raw)());
        let scaled = (raw << self.scale_shift).min(u32::from(u16::MAX));
        LightReading(scaled as u16)
    }
}
