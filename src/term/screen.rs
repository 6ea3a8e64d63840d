use ansi_term::{Colour, Style};
use baya::lang::token::Key;
use baya::mach::{Host, PALETTE_LEN};
use std::collections::{HashSet, VecDeque};

pub const WIDTH: usize = 64;
pub const HEIGHT: usize = 32;
/// Terminal columns per logical pixel.
pub const SCALE: usize = 2;
const LOG_LINES: usize = 4;

pub const PALETTE: [(u8, u8, u8); PALETTE_LEN as usize] = [
    (0, 0, 0),
    (29, 43, 83),
    (126, 37, 83),
    (0, 135, 81),
    (171, 82, 54),
    (95, 87, 79),
    (194, 195, 199),
    (255, 241, 232),
    (255, 0, 77),
    (255, 163, 0),
    (255, 236, 39),
    (0, 228, 54),
    (41, 173, 255),
    (131, 118, 156),
    (255, 119, 168),
    (255, 204, 170),
];

fn colour(index: u8) -> Colour {
    let (r, g, b) = PALETTE[index as usize % PALETTE.len()];
    Colour::RGB(r, g, b)
}

/// Framebuffer host drawn with ANSI background colors.
pub struct Screen {
    pixels: Vec<u8>,
    keys: HashSet<Key>,
    log: VecDeque<String>,
}

impl Screen {
    pub fn new() -> Screen {
        Screen {
            pixels: vec![0; WIDTH * HEIGHT],
            keys: HashSet::new(),
            log: VecDeque::with_capacity(LOG_LINES),
        }
    }

    pub fn press(&mut self, key: Key) {
        self.keys.insert(key);
    }

    /// Terminals only report presses, so a key counts as down for the
    /// frame after it was pressed.
    pub fn release_all(&mut self) {
        self.keys.clear();
    }

    pub fn render(&self) -> String {
        let mut out = String::from("\x1b[H");
        let cell = " ".repeat(SCALE);
        for row in self.pixels.chunks(WIDTH) {
            for color in row {
                let style = Style::new().on(colour(*color));
                out.push_str(&style.paint(cell.as_str()).to_string());
            }
            out.push_str("\r\n");
        }
        for line in self.log.iter() {
            out.push_str(&format!("\x1b[K{}\r\n", line));
        }
        out
    }
}

impl Host for Screen {
    fn clear(&mut self, color: u8) {
        for pixel in self.pixels.iter_mut() {
            *pixel = color;
        }
    }

    fn pixel(&mut self, x: usize, y: usize, color: u8) {
        if x < WIDTH && y < HEIGHT {
            self.pixels[y * WIDTH + x] = color;
        }
    }

    fn print(&mut self, value: u8) {
        if self.log.len() == LOG_LINES {
            self.log.pop_front();
        }
        self.log.push_back(value.to_string());
    }

    fn key_down(&mut self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

/// Host without a screen. Prints go to stdout and no key is ever down.
pub struct Headless;

impl Host for Headless {
    fn clear(&mut self, _color: u8) {}

    fn pixel(&mut self, _x: usize, _y: usize, _color: u8) {}

    fn print(&mut self, value: u8) {
        println!("{}", value);
    }

    fn key_down(&mut self, _key: Key) -> bool {
        false
    }
}
