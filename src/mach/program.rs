use super::{Address, Opcode, SLOT};
use crate::error;
use crate::lang::{Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// A compiled and linked program.
///
/// Code starts at offset 0 and ends with a single `Halt`. Sprite
/// bitmaps, one per slot, follow immediately after it.
#[derive(Debug, Clone)]
pub struct Program {
    memory: Vec<u8>,
    code_len: usize,
    lines: Vec<usize>,
    symbols: Vec<(Address, String)>,
    undefined: Vec<String>,
}

impl Program {
    pub(super) fn new(
        memory: Vec<u8>,
        code_len: usize,
        lines: Vec<usize>,
        symbols: Vec<(Address, String)>,
        undefined: Vec<String>,
    ) -> Program {
        debug_assert_eq!(memory.len(), lines.len() * SLOT);
        Program {
            memory,
            code_len,
            lines,
            symbols,
            undefined,
        }
    }

    pub fn memory(&self) -> &[u8] {
        &self.memory
    }

    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    /// Bytes of code, including the final `Halt`.
    pub fn code_len(&self) -> usize {
        self.code_len
    }

    pub fn sprite_count(&self) -> usize {
        (self.memory.len() - self.code_len) / SLOT
    }

    pub fn sprite_address(&self, index: u8) -> Option<usize> {
        if (index as usize) < self.sprite_count() {
            Some(self.code_len + index as usize * SLOT)
        } else {
            None
        }
    }

    /// Labels that were referenced but never defined. They resolved to 0.
    pub fn undefined_labels(&self) -> &[String] {
        &self.undefined
    }

    pub fn symbols(&self) -> &[(Address, String)] {
        &self.symbols
    }

    pub fn line_for(&self, addr: usize) -> LineNumber {
        self.lines.get(addr / SLOT).copied()
    }

    /// Decodes the instruction at `addr`. Sprite data is never code.
    pub fn fetch(&self, addr: usize) -> Result<Opcode> {
        match self.memory[..self.code_len].get(addr..addr + SLOT) {
            Some(slot) => Opcode::decode(slot),
            None => Err(error!(IllegalInstruction; "PROGRAM COUNTER OUT OF RANGE")),
        }
    }

    /// Decodes the code section back into instructions.
    pub fn decode(&self) -> Result<Vec<Opcode>> {
        self.memory[..self.code_len]
            .chunks_exact(SLOT)
            .enumerate()
            .map(|(slot, bytes)| {
                Opcode::decode(bytes).map_err(|e| e.in_line_number(self.lines.get(slot).copied()))
            })
            .collect()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut symbols = self.symbols.iter().peekable();
        for (slot, bytes) in self.memory.chunks_exact(SLOT).enumerate() {
            let addr = slot * SLOT;
            while let Some((_, name)) = symbols.next_if(|(sym, _)| *sym as usize == addr) {
                writeln!(f, ": {}", name)?;
            }
            let line = self.lines[slot];
            if addr < self.code_len {
                match Opcode::decode(bytes) {
                    Ok(op) => writeln!(f, "{:04}  {:<24}; {}", addr, op.to_string(), line)?,
                    Err(e) => writeln!(f, "{:04}  {:<24}; {}", addr, e.to_string(), line)?,
                }
            } else {
                let rows: Vec<String> = bytes.iter().map(|row| format!("{:08b}", row)).collect();
                writeln!(f, "{:04}  {:<24}; {}", addr, rows.join(" "), line)?;
            }
        }
        for (_, name) in symbols {
            writeln!(f, ": {}", name)?;
        }
        Ok(())
    }
}
