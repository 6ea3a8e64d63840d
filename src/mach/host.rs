use crate::lang::token::Key;
use rand::Rng;

/// Everything a running program can touch outside of its registers.
///
/// Calls are synchronous and must not block.
pub trait Host {
    /// Fill the screen with a palette color.
    fn clear(&mut self, color: u8);

    /// Light one logical pixel. The host applies its own scale and clipping.
    fn pixel(&mut self, x: usize, y: usize, color: u8);

    fn print(&mut self, value: u8);

    fn key_down(&mut self, key: Key) -> bool;

    /// Uniform value in `0..bound`. `bound` is never zero.
    fn random(&mut self, bound: u8) -> u8 {
        rand::thread_rng().gen_range(0..bound)
    }
}
