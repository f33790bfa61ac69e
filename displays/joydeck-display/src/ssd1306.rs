//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C.
//! Drawing happens in the local framebuffer; `flush` streams all pages.

use embedded_hal::i2c::I2c;

use crate::backend::{DisplayBackend, DisplayError};
use crate::framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};

/// SSD1306 I2C address (typically 0x3C or 0x3D)
pub const SSD1306_ADDR: u8 = 0x3C;

/// Control byte prefixes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
}

/// Power-up sequence for a 128x64 panel with horizontal addressing
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_MEMORY_MODE,
    0x00, // Horizontal addressing
    cmd::SET_START_LINE,
    cmd::SET_SEG_REMAP,
    cmd::SET_MUX_RATIO,
    (HEIGHT - 1) as u8,
    cmd::SET_COM_SCAN_DEC,
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config for 64 rows
    cmd::SET_CLOCK_DIV,
    0x80,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x30,
    cmd::SET_CONTRAST,
    0xFF,
    cmd::ENTIRE_DISPLAY_RESUME,
    cmd::SET_NORMAL,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    buffer: FrameBuffer,
    initialized: bool,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a new driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, SSD1306_ADDR)
    }

    /// Create a new driver at a specific 7-bit address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: FrameBuffer::new(),
            initialized: false,
        }
    }

    /// Initialize the display
    ///
    /// Sends the power-up sequence and blanks the panel.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        for &c in INIT_SEQUENCE {
            self.command(c)?;
        }
        self.initialized = true;

        self.buffer.clear();
        self.flush()
    }

    /// Check whether `init` completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// I2C address in use
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Send a command to the display
    fn command(&mut self, c: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, c])
            .map_err(|_| DisplayError::Communication)
    }
}

impl<I2C: I2c> DisplayBackend for Ssd1306<I2C> {
    fn frame(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        // Full-screen window, the controller auto-advances across pages
        for c in [
            cmd::SET_COLUMN_ADDR,
            0,
            (WIDTH - 1) as u8,
            cmd::SET_PAGE_ADDR,
            0,
            (PAGES - 1) as u8,
        ] {
            self.command(c)?;
        }

        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;
        for page in 0..PAGES {
            data[1..].copy_from_slice(self.buffer.page(page));
            self.i2c
                .write(self.address, &data)
                .map_err(|_| DisplayError::Communication)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    use super::*;

    #[derive(Debug)]
    struct BusError;

    impl embedded_hal::i2c::Error for BusError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Bus
        }
    }

    /// Records every write transaction
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl MockI2c {
        fn new() -> Self {
            Self {
                writes: Vec::new(),
                fail: false,
            }
        }

        fn data_writes(&self) -> Vec<&Vec<u8>> {
            self.writes
                .iter()
                .map(|(_, bytes)| bytes)
                .filter(|bytes| bytes[0] == CONTROL_DATA)
                .collect()
        }
    }

    impl ErrorType for MockI2c {
        type Error = BusError;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(BusError);
            }
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_flush_before_init_rejected() {
        let mut display = Ssd1306::new(MockI2c::new());
        assert_eq!(display.flush(), Err(DisplayError::NotInitialized));
        assert!(display.release().writes.is_empty());
    }

    #[test]
    fn test_init_sends_sequence_then_blank_frame() {
        let mut display = Ssd1306::new(MockI2c::new());
        display.init().unwrap();
        assert!(display.is_initialized());

        let bus = display.release();
        assert!(bus.writes.iter().all(|(addr, _)| *addr == SSD1306_ADDR));

        // First command is display off, the init sequence ends with display on
        assert_eq!(bus.writes[0].1, [CONTROL_COMMAND, cmd::DISPLAY_OFF]);
        assert_eq!(
            bus.writes[INIT_SEQUENCE.len() - 1].1,
            [CONTROL_COMMAND, cmd::DISPLAY_ON]
        );

        // Followed by one blank page write per page
        let pages = bus.data_writes();
        assert_eq!(pages.len(), PAGES);
        assert!(pages
            .iter()
            .all(|bytes| bytes.len() == WIDTH + 1 && bytes[1..].iter().all(|b| *b == 0)));
    }

    #[test]
    fn test_flush_streams_framebuffer() {
        let mut display = Ssd1306::with_address(MockI2c::new(), 0x3D);
        display.init().unwrap();
        assert_eq!(display.address(), 0x3D);

        display.frame().set_pixel(5, 9, true);
        display.flush().unwrap();

        let bus = display.release();
        assert!(bus.writes.iter().all(|(addr, _)| *addr == 0x3D));

        let pages = bus.data_writes();
        // Blank frame from init plus the new frame
        assert_eq!(pages.len(), 2 * PAGES);
        let frame = &pages[PAGES..];
        // y=9 is page 1, bit 1; column 5 sits at byte offset 1 + 5
        assert_eq!(frame[1][1 + 5], 1 << 1);
        assert_eq!(frame[0][1 + 5], 0);
    }

    #[test]
    fn test_bus_failure_reported() {
        let mut bus = MockI2c::new();
        bus.fail = true;
        let mut display = Ssd1306::new(bus);

        assert_eq!(display.init(), Err(DisplayError::Communication));
        assert!(!display.is_initialized());
    }

    #[test]
    fn test_backend_clear_and_dimensions() {
        let mut display = Ssd1306::new(MockI2c::new());
        display.frame().set_pixel(0, 0, true);
        display.clear();
        assert_eq!(display.frame().lit_pixels(), 0);
        assert_eq!(display.pixel_dimensions(), (128, 64));
    }
}
