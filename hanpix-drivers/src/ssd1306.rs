//! SSD1306 OLED panel driver
//!
//! Monochrome 128x64 controller on I2C. The driver keeps a full frame
//! buffer in RAM (1 bit per pixel, page-major) and streams it to the panel
//! with [`Ssd1306::update`]; individual pixel writes never touch the bus.

use hanpix_gfx::plane::{Cursor, Mono, Plane, TextPlane};
use hanpix_hal::{DelayMs, I2cBus};

/// SSD1306 I2C address (0x3D on some modules)
const ADDR: u8 = 0x3C;

/// Panel dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;
const BUFFER_LEN: usize = WIDTH * HEIGHT / 8;

/// Control byte prefixes: every I2C write starts with one of these
const CTRL_COMMAND: u8 = 0x00;
const CTRL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const RAM_CONTENT: u8 = 0xA4;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Initialization failure
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError<E> {
    /// No device answered at the panel address
    NotConnected,
    /// Bus error while sending the init sequence or the first frame
    Bus(E),
}

/// SSD1306 driver with in-memory frame buffer
pub struct Ssd1306<I2C> {
    i2c: I2C,
    /// Frame buffer, page-major: byte `x + (y / 8) * WIDTH`, bit `y % 8`
    buffer: [u8; BUFFER_LEN],
    cursor: Cursor,
    inverted: bool,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2cBus,
{
    /// Create a new driver; the panel stays untouched until [`init`](Self::init)
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            buffer: [0; BUFFER_LEN],
            cursor: Cursor::default(),
            inverted: false,
        }
    }

    /// Probe the panel, run the init sequence and push a blank frame
    pub fn init(&mut self, delay: &mut impl DelayMs) -> Result<(), InitError<I2C::Error>> {
        if !self.i2c.probe(ADDR) {
            return Err(InitError::NotConnected);
        }

        // Power-on settle time
        delay.delay_ms(100);

        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_MEMORY_MODE,
            0x10, // Page addressing mode
            cmd::SET_PAGE_ADDR,
            cmd::SET_COM_SCAN_DEC,
            cmd::SET_LOW_COLUMN,
            cmd::SET_HIGH_COLUMN,
            cmd::SET_START_LINE,
            cmd::SET_CONTRAST,
            0xFF,
            cmd::SET_SEG_REMAP,
            cmd::SET_NORMAL,
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::RAM_CONTENT,
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_CLOCK_DIV,
            0xF0,
            cmd::SET_PRECHARGE,
            0x22,
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_VCOM_DETECT,
            0x20, // 0.77 * Vcc
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).map_err(InitError::Bus)?;
        }

        self.fill(Mono::Off);
        self.update().map_err(InitError::Bus)?;
        self.cursor = Cursor::default();

        Ok(())
    }

    fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(ADDR, &[CTRL_COMMAND, cmd])
    }

    /// Stream the frame buffer to the panel, page by page
    pub fn update(&mut self) -> Result<(), I2C::Error> {
        for m in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR + m as u8)?;
            self.command(cmd::SET_LOW_COLUMN)?;
            self.command(cmd::SET_HIGH_COLUMN)?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = CTRL_DATA;
            data[1..].copy_from_slice(&self.buffer[WIDTH * m..WIDTH * (m + 1)]);
            self.i2c.write(ADDR, &data)?;
        }
        Ok(())
    }

    /// Set the whole frame buffer to one color (no bus traffic)
    pub fn fill(&mut self, color: Mono) {
        let byte = match color {
            Mono::Off => 0x00,
            Mono::On => 0xFF,
        };
        self.buffer.fill(byte);
    }

    /// Toggle display inversion
    ///
    /// Complements the frame buffer in place and flips the flag consulted
    /// by `set_pixel`, so content drawn before and after the toggle comes
    /// out consistently inverted on the next [`update`](Self::update).
    pub fn invert(&mut self) {
        self.inverted = !self.inverted;
        for byte in self.buffer.iter_mut() {
            *byte = !*byte;
        }
    }

    /// Turn the panel on (charge pump enabled first)
    pub fn on(&mut self) -> Result<(), I2C::Error> {
        self.command(cmd::SET_CHARGE_PUMP)?;
        self.command(0x14)?;
        self.command(cmd::DISPLAY_ON)
    }

    /// Turn the panel off; the charge pump is disabled to cut power draw
    /// but RAM content is retained
    pub fn off(&mut self) -> Result<(), I2C::Error> {
        self.command(cmd::SET_CHARGE_PUMP)?;
        self.command(0x10)?;
        self.command(cmd::DISPLAY_OFF)
    }
}

impl<I2C> Plane for Ssd1306<I2C>
where
    I2C: I2cBus,
{
    type Color = Mono;

    fn width(&self) -> u16 {
        WIDTH as u16
    }

    fn height(&self) -> u16 {
        HEIGHT as u16
    }

    fn set_pixel(&mut self, x: u16, y: u16, color: Mono) {
        if x >= WIDTH as u16 || y >= HEIGHT as u16 {
            return;
        }
        let color = if self.inverted { color.invert() } else { color };

        let index = usize::from(x) + (usize::from(y) / 8) * WIDTH;
        let bit = 1u8 << (y % 8);
        match color {
            Mono::On => self.buffer[index] |= bit,
            Mono::Off => self.buffer[index] &= !bit,
        }
    }
}

impl<I2C> TextPlane for Ssd1306<I2C>
where
    I2C: I2cBus,
{
    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use hanpix_gfx::Draw;
    use heapless::Vec;

    /// Recording I2C bus: one entry per write, control byte included
    struct MockI2c {
        writes: Vec<Vec<u8, 130>, 72>,
        connected: bool,
    }

    impl MockI2c {
        fn new() -> Self {
            MockI2c {
                writes: Vec::new(),
                connected: true,
            }
        }
    }

    impl I2cBus for MockI2c {
        type Error = Infallible;

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Infallible> {
            assert_eq!(address, ADDR);
            let mut entry = Vec::new();
            entry.extend_from_slice(data).unwrap();
            self.writes.push(entry).unwrap();
            Ok(())
        }

        fn probe(&mut self, _address: u8) -> bool {
            self.connected
        }
    }

    struct NoDelay;

    impl DelayMs for NoDelay {
        fn delay_ms(&mut self, _ms: u32) {}
    }

    /// Sum of lit bits across the data payloads of one update
    fn lit_bits(writes: &[Vec<u8, 130>]) -> u32 {
        writes
            .iter()
            .filter(|w| w[0] == CTRL_DATA)
            .flat_map(|w| w[1..].iter())
            .map(|b| b.count_ones())
            .sum()
    }

    #[test]
    fn init_sends_command_sequence_then_blank_frame() {
        let mut display = Ssd1306::new(MockI2c::new());
        display.init(&mut NoDelay).unwrap();

        let writes = &display.i2c.writes;
        // 28 init commands, then per page: 3 commands + 1 data write
        assert_eq!(writes.len(), 28 + PAGES * 4);
        assert_eq!(writes[0].as_slice(), &[CTRL_COMMAND, cmd::DISPLAY_OFF]);
        assert_eq!(writes[27].as_slice(), &[CTRL_COMMAND, cmd::DISPLAY_ON]);

        let data_writes: Vec<_, 8> = writes.iter().filter(|w| w[0] == CTRL_DATA).collect();
        assert_eq!(data_writes.len(), PAGES);
        for w in &data_writes {
            assert_eq!(w.len(), WIDTH + 1);
            assert!(w[1..].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn init_fails_fast_when_panel_is_absent() {
        let mut bus = MockI2c::new();
        bus.connected = false;
        let mut display = Ssd1306::new(bus);
        assert_eq!(display.init(&mut NoDelay), Err(InitError::NotConnected));
        assert!(display.i2c.writes.is_empty());
    }

    #[test]
    fn pixel_lands_in_page_major_layout() {
        let mut display = Ssd1306::new(MockI2c::new());
        // (0, 9) is page 1, bit 1
        display.set_pixel(0, 9, Mono::On);
        display.update().unwrap();

        let data_writes: Vec<_, 8> = display
            .i2c
            .writes
            .iter()
            .filter(|w| w[0] == CTRL_DATA)
            .collect();
        assert_eq!(data_writes[1][1], 0x02);
        assert_eq!(lit_bits(&display.i2c.writes), 1);
    }

    #[test]
    fn filled_rectangle_covers_inclusive_extent() {
        let mut display = Ssd1306::new(MockI2c::new());
        display.fill_rect(10, 10, 20, 20, Mono::On);
        display.update().unwrap();
        // Extents are inclusive: a 20x20 request lights a 21x21 block.
        assert_eq!(lit_bits(&display.i2c.writes), 21 * 21);
    }

    #[test]
    fn update_addresses_every_page() {
        let mut display = Ssd1306::new(MockI2c::new());
        display.update().unwrap();

        let writes = &display.i2c.writes;
        assert_eq!(writes.len(), PAGES * 4);
        for m in 0..PAGES {
            assert_eq!(
                writes[m * 4].as_slice(),
                &[CTRL_COMMAND, cmd::SET_PAGE_ADDR + m as u8]
            );
            assert_eq!(writes[m * 4 + 3][0], CTRL_DATA);
        }
    }

    #[test]
    fn invert_complements_buffer_and_future_writes() {
        let mut display = Ssd1306::new(MockI2c::new());
        display.set_pixel(0, 0, Mono::On);
        display.invert();
        // Drawn-on pixel is now dark, untouched pixels are lit.
        display.set_pixel(1, 0, Mono::On);
        display.update().unwrap();

        let writes = &display.i2c.writes;
        let page0 = writes.iter().find(|w| w[0] == CTRL_DATA).unwrap();
        assert_eq!(page0[1], 0xFE);
        assert_eq!(page0[2], 0xFE);
        assert_eq!(page0[3], 0xFF);
    }

    #[test]
    fn double_invert_restores_the_frame() {
        let mut display = Ssd1306::new(MockI2c::new());
        display.fill_rect(3, 3, 5, 5, Mono::On);
        display.invert();
        display.invert();
        display.update().unwrap();
        assert_eq!(lit_bits(&display.i2c.writes), 6 * 6);
    }

    #[test]
    fn out_of_bounds_pixels_are_dropped() {
        let mut display = Ssd1306::new(MockI2c::new());
        display.set_pixel(128, 0, Mono::On);
        display.set_pixel(0, 64, Mono::On);
        display.update().unwrap();
        assert_eq!(lit_bits(&display.i2c.writes), 0);
    }
}
