/*!
## Rust Machine Module

This Rust module is a compiler and virtual machine for Baya.

*/

/// Byte offset into program memory. Only the low 12 bits are encodable.
pub type Address = u16;

/// Capacity of program memory in bytes.
pub const MEMORY_SIZE: usize = 4096;
/// Every instruction and every sprite occupies one slot of this many bytes.
pub const SLOT: usize = 4;
pub const MAX_LABELS: usize = 64;
pub const PALETTE_LEN: u8 = 16;
/// Instructions one tick may execute before it is abandoned.
pub const DEFAULT_CYCLES: usize = 100_000;
pub const SPRITE_WIDTH: usize = 8;
pub const SPRITE_HEIGHT: usize = SLOT;

mod compile;
mod host;
mod link;
mod opcode;
mod program;
mod runtime;

pub use compile::compile;
pub use host::Host;
pub use link::Link;
pub use opcode::Opcode;
pub use program::Program;
pub use runtime::Runtime;

#[cfg(test)]
mod tests;
