//! SSD1331 color OLED panel driver
//!
//! 96x64 RGB controller on SPI with separate data/command, chip select and
//! reset lines. This is a direct plane: there is no frame buffer, every
//! pixel write is one SPI transaction that positions the controller's
//! write window and sends the three color bytes. Simple and RAM-free, at
//! the cost of bus traffic proportional to the pixels drawn.

use hanpix_gfx::plane::{Cursor, Plane, Rgb, TextPlane};
use hanpix_hal::{DelayMs, OutputPin, SpiBus};

/// Panel dimensions
const WIDTH: usize = 96;
const HEIGHT: usize = 64;

/// Window bounds sent with every pixel write
const LAST_COLUMN: u8 = WIDTH as u8 - 1;
const LAST_ROW: u8 = HEIGHT as u8 - 1;

/// SSD1331 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_REMAP: u8 = 0xA0;
    pub const SET_START_LINE: u8 = 0xA1;
    pub const SET_DISPLAY_OFFSET: u8 = 0xA2;
    pub const NORMAL_DISPLAY: u8 = 0xA4;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const MASTER_CONFIG: u8 = 0xAD;
    pub const POWER_SAVE: u8 = 0xB0;
    pub const SET_PHASE_PERIOD: u8 = 0xB1;
    pub const SET_CLOCK_DIV: u8 = 0xB3;
    pub const GRAYSCALE_RESET: u8 = 0xB9;
    pub const SET_COLUMN: u8 = 0x15;
    pub const SET_ROW: u8 = 0x75;
    pub const CONTRAST_A: u8 = 0x81;
    pub const CONTRAST_B: u8 = 0x82;
    pub const CONTRAST_C: u8 = 0x83;
    pub const MASTER_CURRENT: u8 = 0x87;
    pub const PRECHARGE_A: u8 = 0x8A;
    pub const PRECHARGE_B: u8 = 0x8B;
    pub const PRECHARGE_C: u8 = 0x8C;
    pub const PRECHARGE_LEVEL: u8 = 0xBB;
    pub const SET_VCOMH: u8 = 0xBE;
}

/// SSD1331 driver, direct (unbuffered) plane
pub struct Ssd1331<SPI, DC, CS, RST> {
    spi: SPI,
    dc: DC,
    cs: CS,
    rst: RST,
    cursor: Cursor,
}

impl<SPI, DC, CS, RST> Ssd1331<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    /// Create a new driver; the panel stays untouched until [`init`](Self::init)
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST) -> Self {
        Self {
            spi,
            dc,
            cs,
            rst,
            cursor: Cursor::default(),
        }
    }

    /// Pulse the reset line, run the init sequence and clear the panel
    pub fn init(&mut self, delay: &mut impl DelayMs) -> Result<(), SPI::Error> {
        self.rst.set_high();
        self.dc.set_high();
        self.cs.set_high();

        // Power-on settle time
        delay.delay_ms(100);

        // Reset pulse
        self.dc.set_low();
        self.rst.set_high();
        self.cs.set_high();
        delay.delay_ms(1);
        self.rst.set_low();
        delay.delay_ms(1);
        self.rst.set_high();
        delay.delay_ms(50);

        self.command(&[
            cmd::DISPLAY_OFF,
            cmd::SET_REMAP,
            0xB2, // 65k format 2, RGB order
            cmd::SET_START_LINE,
            0x00,
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_MUX_RATIO,
            0x3F,
            cmd::MASTER_CONFIG,
            0x8E,
            cmd::POWER_SAVE,
            0x0B, // Power save disabled
            cmd::SET_PHASE_PERIOD,
            0x31,
            cmd::SET_CLOCK_DIV,
            0xF0,
            cmd::SET_COLUMN,
            0x00,
            LAST_COLUMN,
            cmd::SET_ROW,
            0x00,
            LAST_ROW,
            cmd::CONTRAST_A,
            0x80,
            cmd::CONTRAST_B,
            0x80,
            cmd::CONTRAST_C,
            0x80,
            cmd::MASTER_CURRENT,
            0x0F,
            cmd::PRECHARGE_A,
            0x64,
            cmd::PRECHARGE_B,
            0x78,
            cmd::PRECHARGE_C,
            0x64,
            cmd::PRECHARGE_LEVEL,
            0x3C,
            cmd::SET_VCOMH,
            0x3E,
            cmd::GRAYSCALE_RESET,
            cmd::NORMAL_DISPLAY,
            cmd::DISPLAY_ON,
        ])?;
        delay.delay_ms(1);

        self.fill(Rgb::BLACK);
        self.cursor = Cursor::default();

        Ok(())
    }

    /// Send command bytes with the data/command line low
    fn command(&mut self, bytes: &[u8]) -> Result<(), SPI::Error> {
        self.dc.set_low();
        self.cs.set_low();
        let res = self.spi.write(bytes);
        self.cs.set_high();
        res
    }

    /// One pixel-write transaction: position the write window, then send
    /// the three 6-bit color channels
    fn pixel_raw(&mut self, x: u16, y: u16, color: Rgb) -> Result<(), SPI::Error> {
        self.dc.set_low();
        self.cs.set_low();
        let window = self.spi.write(&[
            cmd::SET_COLUMN,
            x as u8,
            LAST_COLUMN,
            cmd::SET_ROW,
            y as u8,
            LAST_ROW,
        ]);
        self.dc.set_high();
        let data = self.spi.write(&color.channels6());
        self.cs.set_high();
        window.and(data)
    }

    /// Paint the whole panel one color, pixel by pixel
    pub fn fill(&mut self, color: Rgb) {
        for y in 0..HEIGHT as u16 {
            for x in 0..WIDTH as u16 {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Turn the panel on
    pub fn on(&mut self) -> Result<(), SPI::Error> {
        self.command(&[cmd::DISPLAY_ON])
    }

    /// Turn the panel off
    pub fn off(&mut self) -> Result<(), SPI::Error> {
        self.command(&[cmd::DISPLAY_OFF])
    }
}

impl<SPI, DC, CS, RST> Plane for Ssd1331<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    type Color = Rgb;

    fn width(&self) -> u16 {
        WIDTH as u16
    }

    fn height(&self) -> u16 {
        HEIGHT as u16
    }

    fn set_pixel(&mut self, x: u16, y: u16, color: Rgb) {
        if x >= WIDTH as u16 || y >= HEIGHT as u16 {
            return;
        }
        // A dropped write costs one stale pixel; nothing useful to report
        let _ = self.pixel_raw(x, y, color);
    }
}

impl<SPI, DC, CS, RST> TextPlane for Ssd1331<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
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
    use core::cell::RefCell;
    use core::convert::Infallible;
    use heapless::Vec;

    /// One observable bus event: a pin edge or an SPI write
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Pin(char, bool),
        Write(Vec<u8, 64>),
    }

    /// Shared, lossy event log (overflow drops events; tests assert on
    /// the prefix)
    type Log = RefCell<Vec<Event, 64>>;

    struct MockSpi<'a> {
        log: &'a Log,
    }

    impl SpiBus for MockSpi<'_> {
        type Error = Infallible;

        fn write(&mut self, data: &[u8]) -> Result<(), Infallible> {
            let mut bytes = Vec::new();
            bytes.extend_from_slice(data).unwrap();
            let _ = self.log.borrow_mut().push(Event::Write(bytes));
            Ok(())
        }
    }

    struct MockPin<'a> {
        log: &'a Log,
        name: char,
    }

    impl OutputPin for MockPin<'_> {
        fn set_high(&mut self) {
            let _ = self.log.borrow_mut().push(Event::Pin(self.name, true));
        }

        fn set_low(&mut self) {
            let _ = self.log.borrow_mut().push(Event::Pin(self.name, false));
        }
    }

    struct NoDelay;

    impl DelayMs for NoDelay {
        fn delay_ms(&mut self, _ms: u32) {}
    }

    fn driver(log: &Log) -> Ssd1331<MockSpi<'_>, MockPin<'_>, MockPin<'_>, MockPin<'_>> {
        Ssd1331::new(
            MockSpi { log },
            MockPin { log, name: 'd' },
            MockPin { log, name: 'c' },
            MockPin { log, name: 'r' },
        )
    }

    #[test]
    fn pixel_write_is_one_window_then_color_transaction() {
        let log = Log::default();
        let mut display = driver(&log);
        display.set_pixel(5, 9, Rgb::RED);

        let events = log.borrow();
        assert_eq!(events[0], Event::Pin('d', false));
        assert_eq!(events[1], Event::Pin('c', false));
        match &events[2] {
            Event::Write(bytes) => {
                assert_eq!(bytes.as_slice(), &[0x15, 5, 0x5F, 0x75, 9, 0x3F]);
            }
            other => panic!("expected window write, got {:?}", other),
        }
        assert_eq!(events[3], Event::Pin('d', true));
        match &events[4] {
            // 0xFF0000 truncated to 6 bits per channel
            Event::Write(bytes) => assert_eq!(bytes.as_slice(), &[0x3F, 0x00, 0x00]),
            other => panic!("expected color write, got {:?}", other),
        }
        assert_eq!(events[5], Event::Pin('c', true));
        assert_eq!(events.len(), 6);
    }

    #[test]
    fn out_of_bounds_pixels_touch_nothing() {
        let log = Log::default();
        let mut display = driver(&log);
        display.set_pixel(96, 0, Rgb::WHITE);
        display.set_pixel(0, 64, Rgb::WHITE);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn init_resets_then_sends_command_sequence() {
        let log = Log::default();
        let mut display = driver(&log);
        display.init(&mut NoDelay).unwrap();

        let events = log.borrow();
        // Idle levels, the reset pulse on RST with DC held low, then the
        // command transaction's own DC/CS edges
        assert_eq!(
            &events[..10],
            &[
                Event::Pin('r', true),
                Event::Pin('d', true),
                Event::Pin('c', true),
                Event::Pin('d', false),
                Event::Pin('r', true),
                Event::Pin('c', true),
                Event::Pin('r', false),
                Event::Pin('r', true),
                Event::Pin('d', false),
                Event::Pin('c', false),
            ]
        );
        match &events[10] {
            Event::Write(bytes) => {
                assert_eq!(bytes.len(), 44);
                assert_eq!(bytes[0], cmd::DISPLAY_OFF);
                assert_eq!(bytes[43], cmd::DISPLAY_ON);
            }
            other => panic!("expected init command write, got {:?}", other),
        }
        assert_eq!(events[11], Event::Pin('c', true));
    }

    #[test]
    fn off_and_on_are_single_command_writes() {
        let log = Log::default();
        let mut display = driver(&log);
        display.off().unwrap();
        display.on().unwrap();

        let events = log.borrow();
        assert_eq!(events[2], Event::Write(Vec::from_slice(&[0xAE]).unwrap()));
        assert_eq!(events[6], Event::Write(Vec::from_slice(&[0xAF]).unwrap()));
    }
}
