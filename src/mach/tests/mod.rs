use super::*;
use crate::lang::token::{Comparison, Key, Operator, Register};
use crate::lang::{Error, ErrorCode};


/// Host that remembers everything a program did to it.
#[derive(Debug, Default)]
struct Recorder {
    printed: Vec<u8>,
    cleared: Vec<u8>,
    pixels: Vec<(usize, usize, u8)>,
    keys: Vec<Key>,
    random: u8,
}

impl Host for Recorder {
    fn clear(&mut self, color: u8) {
        self.cleared.push(color);
    }

    fn pixel(&mut self, x: usize, y: usize, color: u8) {
        self.pixels.push((x, y, color));
    }

    fn print(&mut self, value: u8) {
        self.printed.push(value);
    }

    fn key_down(&mut self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    fn random(&mut self, bound: u8) -> u8 {
        self.random % bound
    }
}

fn ops(source: &str) -> Vec<Opcode> {
    compile(source).unwrap().decode().unwrap()
}

fn compile_error(source: &str) -> Error {
    compile(source).unwrap_err()
}

fn run(source: &str) -> Recorder {
    run_ticks(source, 1)
}

fn run_ticks(source: &str, ticks: usize) -> Recorder {
    let program = compile(source).unwrap();
    let mut runtime = Runtime::new();
    let mut host = Recorder::default();
    for _ in 0..ticks {
        runtime.tick(&program, &mut host).unwrap();
    }
    host
}

fn run_error(source: &str) -> Error {
    let program = compile(source).unwrap();
    let mut host = Recorder::default();
    Runtime::new().tick(&program, &mut host).unwrap_err()
}
