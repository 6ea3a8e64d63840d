//! # Baya
//!
//! Compiles a Baya program and runs it once per frame in the terminal.
//!

mod term;

fn main() {
    term::main()
}
