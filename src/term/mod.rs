extern crate ansi_term;
extern crate ctrlc;
extern crate mortal;
use ansi_term::{Colour, Style};
use baya::error;
use baya::lang::{token::Key, Error};
use baya::mach::{compile, Program, Runtime};
use mortal::{Event, PrepareConfig, Terminal};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

mod screen;
use screen::{Headless, Screen};

type Result<T> = std::result::Result<T, Error>;

const USAGE: &str = "USAGE: baya [--list] [--ticks N] [--fps N] [FILE]";

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

#[derive(Debug, PartialEq)]
struct Options {
    file: String,
    list: bool,
    ticks: Option<u64>,
    fps: u64,
}

impl Options {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Options> {
        let mut options = Options {
            file: "game.baya".to_string(),
            list: false,
            ticks: None,
            fps: 30,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--list" => options.list = true,
                "--ticks" => options.ticks = Some(number(args.next())?),
                "--fps" => options.fps = number(args.next())?.max(1),
                s if s.starts_with("--") => return Err(error!(SyntaxError; USAGE)),
                _ => options.file = arg,
            }
        }
        Ok(options)
    }
}

fn number(arg: Option<String>) -> Result<u64> {
    match arg.map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => Ok(n),
        _ => Err(error!(BadNumber; USAGE)),
    }
}

fn io_error(error: std::io::Error) -> Error {
    error!(InternalError; &error.to_string())
}

fn main_loop(interrupted: Arc<AtomicBool>) -> Result<()> {
    let options = Options::parse(std::env::args().skip(1))?;
    let source = load(&options.file)?;
    let program = compile(&source)?;
    for name in program.undefined_labels() {
        let warning = format!("WARNING: LABEL {} IS NEVER DEFINED; IT JUMPS TO 0", name);
        eprintln!("{}", Colour::Yellow.paint(warning));
    }
    if options.list {
        print!("{}", program);
        return Ok(());
    }
    match options.ticks {
        Some(ticks) => run_headless(&program, ticks, interrupted),
        None => run_screen(&program, options.fps, interrupted),
    }
}

fn load(filename: &str) -> Result<String> {
    let mut file = match File::open(filename) {
        Ok(file) => file,
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; filename)),
                _ => return Err(error!(InternalError; msg.as_str())),
            }
        }
    };
    let mut source = String::new();
    file.read_to_string(&mut source).map_err(io_error)?;
    Ok(source)
}

fn run_headless(program: &Program, ticks: u64, interrupted: Arc<AtomicBool>) -> Result<()> {
    let mut runtime = Runtime::new();
    let mut host = Headless;
    for _ in 0..ticks {
        if interrupted.load(Ordering::SeqCst) {
            break;
        }
        runtime.tick(program, &mut host)?;
    }
    Ok(())
}

fn run_screen(program: &Program, fps: u64, interrupted: Arc<AtomicBool>) -> Result<()> {
    let terminal = Terminal::new().map_err(io_error)?;
    let state = terminal.prepare(PrepareConfig::default()).map_err(io_error)?;
    print!("\x1b[2J\x1b[?25l");
    let result = frame_loop(&terminal, program, fps, interrupted);
    print!("\x1b[?25h\r\n");
    let flushed = std::io::stdout().flush().map_err(io_error);
    terminal.restore(state).map_err(io_error)?;
    result.and(flushed)
}

fn frame_loop(
    terminal: &Terminal,
    program: &Program,
    fps: u64,
    interrupted: Arc<AtomicBool>,
) -> Result<()> {
    let frame = Duration::from_micros(1_000_000 / fps);
    let mut runtime = Runtime::new();
    let mut screen = Screen::new();
    let mut stdout = std::io::stdout();
    loop {
        let started = Instant::now();
        if interrupted.load(Ordering::SeqCst) {
            return Ok(());
        }
        while let Some(event) = terminal.read_event(Some(Duration::from_millis(0))).map_err(io_error)? {
            if let Event::Key(key) = event {
                match key {
                    mortal::Key::Escape | mortal::Key::Ctrl('c') => return Ok(()),
                    key => {
                        if let Some(key) = map_key(key) {
                            screen.press(key);
                        }
                    }
                }
            }
        }
        runtime.tick(program, &mut screen)?;
        screen.release_all();
        stdout.write_all(screen.render().as_bytes()).map_err(io_error)?;
        stdout.flush().map_err(io_error)?;
        if let Some(rest) = frame.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}

fn map_key(key: mortal::Key) -> Option<Key> {
    use mortal::Key::*;
    match key {
        Up | Char('w') => Some(Key::Up),
        Down | Char('s') => Some(Key::Down),
        Left | Char('a') => Some(Key::Left),
        Right | Char('d') => Some(Key::Right),
        Enter | Char(' ') | Char('z') => Some(Key::Action),
        _ => None,
    }
}
