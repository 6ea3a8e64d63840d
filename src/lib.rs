//! # Baya
//!
//! A tiny register language for tiny games.
//!
//! A Baya program is compiled once into 4-byte instructions that fill at
//! most 4096 bytes of memory. The host then runs the whole program from the
//! top once per frame. Registers keep their values between frames, so a
//! program is the body of a game loop rather than a script that runs once.
//!
//! ```text
//! ( move a dot with the arrow keys )
//! clear 1
//! key left then x += -1
//! key right then x += 1
//! color 8
//! sprite dot
//! data
//! : dot
//! xx......
//! xx......
//! ........
//! ........
//! ```
//!
//! Run it with `baya dot.baya`. Use `baya --list dot.baya` to see what
//! it compiled to.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
