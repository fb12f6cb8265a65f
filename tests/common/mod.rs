//! Shared test doubles: scripted serial port, no-op delay, fixed system info

#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use serial_menu::{SerialPort, SystemInfo};

/// Serial port fed from a script of input bursts.
///
/// Each burst becomes readable only after the port has been polled while
/// empty, the way typed input shows up some time after a prompt. Bytes
/// left over from a burst are what a prompt's input flush discards.
pub struct ScriptedPort {
    bursts: VecDeque<Vec<u8>>,
    pending: VecDeque<u8>,
    output: Vec<u8>,
    idle_polls: usize,
}

impl ScriptedPort {
    pub fn new(bursts: &[&str]) -> Self {
        Self {
            bursts: bursts.iter().map(|b| b.as_bytes().to_vec()).collect(),
            pending: VecDeque::new(),
            output: Vec::new(),
            idle_polls: 0,
        }
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Bursts not yet delivered
    pub fn bursts_left(&self) -> usize {
        self.bursts.len()
    }
}

impl SerialPort for ScriptedPort {
    fn available(&mut self) -> bool {
        if !self.pending.is_empty() {
            return true;
        }

        match self.bursts.pop_front() {
            Some(burst) => {
                self.pending.extend(burst);
                self.idle_polls = 0;
            }
            None => {
                self.idle_polls += 1;
                assert!(self.idle_polls < 100, "input script exhausted");
            }
        }
        false
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.pending.pop_front()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes);
    }
}

/// Delay that returns at once
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Reports a fixed amount of free memory
pub struct FixedSystem(pub usize);

impl SystemInfo for FixedSystem {
    fn free_memory(&self) -> usize {
        self.0
    }
}
