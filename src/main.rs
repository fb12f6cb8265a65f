//! serial-menu - Main entry point
//!
//! On the ESP32-S3 the demo menu runs on UART0 (GPIO43 TX, GPIO44 RX) and
//! starts over whenever it is exited. A host build runs it once on
//! stdin/stdout, which is the quickest way to try out a table change.

use serial_menu::{demo, MenuConfig, Session, Terminal};

#[cfg(target_os = "espidf")]
mod board {
    use esp_idf_svc::hal::delay::{FreeRtos, NON_BLOCK};
    use esp_idf_svc::hal::gpio;
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::hal::uart::{self, UartDriver};
    use esp_idf_svc::hal::units::Hertz;
    use esp_idf_svc::sys::EspError;
    use log::{info, warn};
    use serial_menu::{SerialPort, SystemInfo};

    pub const UART_BAUD_RATE: u32 = 115_200;

    /// UART0 with a one-byte lookahead for `available()`
    pub struct UartPort<'d> {
        uart: UartDriver<'d>,
        peeked: Option<u8>,
    }

    impl<'d> UartPort<'d> {
        pub fn new(uart: UartDriver<'d>) -> Self {
            Self { uart, peeked: None }
        }
    }

    impl SerialPort for UartPort<'_> {
        fn available(&mut self) -> bool {
            if self.peeked.is_some() {
                return true;
            }

            let mut byte = [0u8; 1];
            match self.uart.read(&mut byte, NON_BLOCK) {
                Ok(1) => {
                    self.peeked = Some(byte[0]);
                    true
                }
                Ok(_) => false,
                Err(e) => {
                    warn!("uart read: {}", e);
                    false
                }
            }
        }

        fn read_byte(&mut self) -> Option<u8> {
            if self.peeked.is_none() {
                self.available();
            }
            self.peeked.take()
        }

        fn write(&mut self, bytes: &[u8]) {
            if let Err(e) = self.uart.write(bytes) {
                warn!("uart write: {}", e);
            }
        }
    }

    pub struct EspSystem;

    impl SystemInfo for EspSystem {
        fn free_memory(&self) -> usize {
            // SAFETY: plain heap statistics query
            unsafe { esp_idf_svc::sys::esp_get_free_heap_size() as usize }
        }
    }

    pub fn run() -> Result<(), EspError> {
        let peripherals = Peripherals::take()?;

        let uart_config = uart::config::Config::default().baudrate(Hertz(UART_BAUD_RATE));
        let uart = UartDriver::new(
            peripherals.uart0,
            peripherals.pins.gpio43,
            peripherals.pins.gpio44,
            Option::<gpio::AnyIOPin>::None, // CTS
            Option::<gpio::AnyIOPin>::None, // RTS
            &uart_config,
        )?;
        info!("UART0 ready at {} baud", UART_BAUD_RATE);

        let mut port = UartPort::new(uart);
        let mut delay = FreeRtos;
        let menu = super::demo::menu();

        loop {
            let mut terminal = super::Terminal::new(&mut port, &mut delay, super::MenuConfig::default());
            super::Session::new(menu).run(&mut terminal, &EspSystem);
            FreeRtos::delay_ms(1000);
        }
    }
}

#[cfg(not(target_os = "espidf"))]
mod host {
    use std::io::{Read, Write};
    use std::sync::mpsc::{self, Receiver, TryRecvError};
    use std::thread;
    use std::time::Duration;

    use embedded_hal::delay::DelayNs;
    use serial_menu::{SerialPort, SystemInfo};

    /// stdin/stdout behind the serial port interface.
    ///
    /// A reader thread feeds stdin bytes through a channel so that
    /// `available()` can poll without blocking.
    pub struct StdioPort {
        rx: Receiver<u8>,
        peeked: Option<u8>,
    }

    impl StdioPort {
        pub fn new() -> Self {
            let (tx, rx) = mpsc::channel();
            thread::spawn(move || {
                for byte in std::io::stdin().lock().bytes() {
                    let Ok(byte) = byte else { break };
                    if tx.send(byte).is_err() {
                        break;
                    }
                }
            });
            Self { rx, peeked: None }
        }
    }

    impl SerialPort for StdioPort {
        fn available(&mut self) -> bool {
            if self.peeked.is_some() {
                return true;
            }
            match self.rx.try_recv() {
                Ok(byte) => {
                    self.peeked = Some(byte);
                    true
                }
                Err(TryRecvError::Empty) => false,
                Err(TryRecvError::Disconnected) => {
                    log::error!("stdin closed");
                    std::process::exit(0);
                }
            }
        }

        fn read_byte(&mut self) -> Option<u8> {
            if self.peeked.is_none() {
                self.available();
            }
            self.peeked.take()
        }

        fn write(&mut self, bytes: &[u8]) {
            let mut out = std::io::stdout().lock();
            let _ = out.write_all(bytes);
            let _ = out.flush();
        }
    }

    pub struct ThreadDelay;

    impl DelayNs for ThreadDelay {
        fn delay_ns(&mut self, ns: u32) {
            thread::sleep(Duration::from_nanos(ns as u64));
        }
    }

    /// No heap statistics on the host
    pub struct HostSystem;

    impl SystemInfo for HostSystem {
        fn free_memory(&self) -> usize {
            0
        }
    }
}

#[cfg(target_os = "espidf")]
fn main() {
    // Initialize ESP-IDF
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    if let Err(e) = board::run() {
        log::error!("menu stopped: {}", e);
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    env_logger::init();

    let mut port = host::StdioPort::new();
    let mut delay = host::ThreadDelay;
    let config = MenuConfig::default().with_poll_interval(20);
    let mut terminal = Terminal::new(&mut port, &mut delay, config);

    Session::new(demo::menu()).run(&mut terminal, &host::HostSystem);
}
