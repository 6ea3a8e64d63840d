use super::{Host, Opcode, Program, DEFAULT_CYCLES, SLOT, SPRITE_HEIGHT, SPRITE_WIDTH};
use crate::error;
use crate::lang::token::{Operator, Register};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// The virtual machine.
///
/// Registers are zeroed once at creation and persist across ticks.
/// Every tick runs the program from offset 0 until it halts.
#[derive(Debug, Clone)]
pub struct Runtime {
    pc: usize,
    registers: [u8; Register::COUNT],
    cycles: usize,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new()
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::with_cycles(DEFAULT_CYCLES)
    }

    /// A runtime that abandons any tick executing more than `cycles`
    /// instructions.
    pub fn with_cycles(cycles: usize) -> Runtime {
        Runtime {
            pc: 0,
            registers: [0; Register::COUNT],
            cycles,
        }
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn register(&self, reg: Register) -> u8 {
        self.registers[reg.id() as usize]
    }

    pub fn set_register(&mut self, reg: Register, value: u8) {
        self.registers[reg.id() as usize] = value;
    }

    /// Run the program once from the top.
    ///
    /// On success the `tick` register is incremented. An error abandons
    /// the tick where it happened; registers keep whatever it had written.
    pub fn tick<H: Host>(&mut self, program: &Program, host: &mut H) -> Result<()> {
        self.pc = 0;
        let mut task = Task {
            rt: self,
            program,
            host,
        };
        task.run()?;
        let tick = self.register(Register::Tick);
        self.set_register(Register::Tick, tick.wrapping_add(1));
        Ok(())
    }
}

struct Task<'rt, 'p, 'h, H> {
    rt: &'rt mut Runtime,
    program: &'p Program,
    host: &'h mut H,
}

impl<'rt, 'p, 'h, H> Task<'rt, 'p, 'h, H>
where
    H: Host,
{
    fn run(&mut self) -> Result<()> {
        let mut prev = 0;
        for _ in 0..self.rt.cycles {
            let addr = self.rt.pc;
            match self.step() {
                Ok(true) => prev = addr,
                Ok(false) => return Ok(()),
                Err(e) => {
                    // blame whatever sent the pc out of the code
                    let at = if addr < self.program.code_len() { addr } else { prev };
                    return Err(e.in_line_number(self.program.line_for(at)));
                }
            }
        }
        let line = self.program.line_for(self.rt.pc);
        Err(error!(CyclesExceeded, line))
    }

    fn reg(&self, reg: Register) -> u8 {
        self.rt.register(reg)
    }

    fn set(&mut self, reg: Register, value: u8) {
        self.rt.set_register(reg, value)
    }

    fn skip_unless(&mut self, condition: bool) {
        if !condition {
            self.rt.pc += SLOT;
        }
    }

    /// Execute one instruction. Returns false on `Halt`.
    fn step(&mut self) -> Result<bool> {
        use Opcode::*;
        let op = self.program.fetch(self.rt.pc)?;
        self.rt.pc += SLOT;
        match op {
            Halt => return Ok(false),
            Jump(addr) => self.rt.pc = addr as usize,
            Print(r) => {
                let value = self.reg(r);
                self.host.print(value);
            }
            Clear(color) => self.host.clear(color),
            Color(color) => self.set(Register::Ink, color),
            Sprite(addr) => self.sprite(addr as usize)?,
            SpriteIndex(n) => match self.program.sprite_address(n) {
                Some(addr) => self.sprite(addr)?,
                None => return Err(error!(UndefinedSprite)),
            },
            Assign(op, dst, src) => {
                let value = operate(op, self.reg(dst), self.reg(src))?;
                self.set(dst, value);
            }
            SetLiteral(r, n) => self.set(r, n),
            AddLiteral(r, n) => {
                let value = self.reg(r).wrapping_add(n);
                self.set(r, value);
            }
            Random(r, bound) => {
                let value = self.host.random(bound);
                self.set(r, value);
            }
            IfRegister(cmp, lhs, rhs) => {
                let condition = cmp.eval(self.reg(lhs), self.reg(rhs));
                self.skip_unless(condition);
            }
            IfLiteral(cmp, r, n) => {
                let condition = cmp.eval(self.reg(r), n);
                self.skip_unless(condition);
            }
            IfKey(key) => {
                let down = self.host.key_down(key);
                self.skip_unless(down);
            }
        }
        Ok(true)
    }

    // 8x4 bitmap at addr, top row first, high bit leftmost
    fn sprite(&mut self, addr: usize) -> Result<()> {
        let program = self.program;
        let bitmap = match program.memory().get(addr..addr + SPRITE_HEIGHT) {
            Some(bitmap) => bitmap,
            None => return Err(error!(IllegalInstruction; "SPRITE OUT OF RANGE")),
        };
        let x = self.reg(Register::X) as usize;
        let y = self.reg(Register::Y) as usize;
        let ink = self.reg(Register::Ink);
        for (row, &bits) in bitmap.iter().enumerate() {
            for col in 0..SPRITE_WIDTH {
                if bits & (0x80u8 >> col) != 0 {
                    self.host.pixel(x + col, y + row, ink);
                }
            }
        }
        Ok(())
    }
}

fn operate(op: Operator, lhs: u8, rhs: u8) -> Result<u8> {
    use Operator::*;
    let value = match op {
        Set => rhs,
        Add => lhs.wrapping_add(rhs),
        Sub => lhs.wrapping_sub(rhs),
        Mul => lhs.wrapping_mul(rhs),
        Div => lhs.checked_div(rhs).ok_or_else(|| error!(DivisionByZero))?,
        Mod => lhs.checked_rem(rhs).ok_or_else(|| error!(DivisionByZero))?,
        And => lhs & rhs,
        Or => lhs | rhs,
        Xor => lhs ^ rhs,
    };
    Ok(value)
}
