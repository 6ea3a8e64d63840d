#![allow(dead_code)]
use baya::lang::token::Key;
use baya::mach::{compile, Host, Runtime};

#[derive(Default)]
pub struct Recorder {
    pub out: String,
    pub pixels: Vec<(usize, usize, u8)>,
    pub keys: Vec<Key>,
}

impl Host for Recorder {
    fn clear(&mut self, color: u8) {
        self.out.push_str(&format!("CLEAR {}\n", color));
    }

    fn pixel(&mut self, x: usize, y: usize, color: u8) {
        self.pixels.push((x, y, color));
    }

    fn print(&mut self, value: u8) {
        self.out.push_str(&format!("{}\n", value));
    }

    fn key_down(&mut self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    fn random(&mut self, bound: u8) -> u8 {
        bound - 1
    }
}

pub fn exec(source: &str) -> String {
    exec_n(source, 1)
}

pub fn exec_n(source: &str, ticks: usize) -> String {
    let mut host = Recorder::default();
    run(source, ticks, &mut host);
    host.out
}

/// Compiles and runs `source`, writing any error into the output.
pub fn run(source: &str, ticks: usize, host: &mut Recorder) {
    let program = match compile(source) {
        Ok(program) => program,
        Err(error) => {
            host.out.push_str(&format!("{}\n", error));
            return;
        }
    };
    let mut runtime = Runtime::new();
    for _ in 0..ticks {
        if let Err(error) = runtime.tick(&program, host) {
            host.out.push_str(&format!("{}\n", error));
            return;
        }
    }
}
