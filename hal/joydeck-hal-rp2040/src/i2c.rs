//! I2C bus configuration

use joydeck_hal::I2cConfig;

/// Translate the bus settings for `embassy_rp::i2c`
pub fn i2c_config(config: I2cConfig) -> embassy_rp::i2c::Config {
    let mut cfg = embassy_rp::i2c::Config::default();
    cfg.frequency = config.frequency;
    cfg
}
