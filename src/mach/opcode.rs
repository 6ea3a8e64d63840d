use super::{Address, SLOT};
use crate::error;
use crate::lang::token::{Comparison, Key, Operator, Register};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Virtual machine instruction set
///
/// Every instruction is encoded into one 4-byte slot: a tag byte followed by
/// up to three operand bytes. Unused operand bytes are zero. Literals are
/// split into two nibbles and addresses into three.
///
/// | Instruction  | Bytes                    | Source            |
/// |--------------|--------------------------|-------------------|
/// | `Halt`       | `. _ _ _`                | (end of program)  |
/// | `Jump`       | `g N N N`                | `goto NAME`       |
/// | `Print`      | `p r _ _`                | `print r`         |
/// | `Clear`      | `c _ N N`                | `clear N`         |
/// | `Color`      | `k _ N N`                | `color N`         |
/// | `Sprite`     | `s N N N`                | `sprite NAME`     |
/// | `SpriteIndex`| `S _ N N`                | `sprite N`        |
/// | `Assign`     | `: o r r`                | `r op r`          |
/// | `SetLiteral` | `= r N N`                | `r = N`           |
/// | `AddLiteral` | `+ r N N`                | `r += N`          |
/// | `Random`     | `r r N N`                | `r = random N`    |
/// | `IfRegister` | `? c r r`                | `if r cmp r then` |
/// | `IfLiteral`  | `i cr N N`               | `if r cmp N then` |
/// | `IfKey`      | `K k _ _`                | `key k then`      |
///
/// `IfLiteral` packs the comparison into the high nibble and the register
/// into the low nibble of its first operand.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Halt,
    Jump(Address),
    Print(Register),
    Clear(u8),
    Color(u8),
    Sprite(Address),
    SpriteIndex(u8),
    Assign(Operator, Register, Register),
    SetLiteral(Register, u8),
    AddLiteral(Register, u8),
    Random(Register, u8),
    /// Skips the next instruction when the comparison is false.
    IfRegister(Comparison, Register, Register),
    IfLiteral(Comparison, Register, u8),
    IfKey(Key),
}

mod tag {
    pub const HALT: u8 = b'.';
    pub const JUMP: u8 = b'g';
    pub const PRINT: u8 = b'p';
    pub const CLEAR: u8 = b'c';
    pub const COLOR: u8 = b'k';
    pub const SPRITE: u8 = b's';
    pub const SPRITE_INDEX: u8 = b'S';
    pub const ASSIGN: u8 = b':';
    pub const SET_LITERAL: u8 = b'=';
    pub const ADD_LITERAL: u8 = b'+';
    pub const RANDOM: u8 = b'r';
    pub const IF_REGISTER: u8 = b'?';
    pub const IF_LITERAL: u8 = b'i';
    pub const IF_KEY: u8 = b'K';
}

fn nn(tag: u8, a: u8, n: u8) -> [u8; SLOT] {
    [tag, a, n >> 4, n & 0xF]
}

fn nnn(tag: u8, addr: Address) -> [u8; SLOT] {
    [
        tag,
        (addr >> 8 & 0xF) as u8,
        (addr >> 4 & 0xF) as u8,
        (addr & 0xF) as u8,
    ]
}

fn illegal(msg: &str) -> Error {
    error!(IllegalInstruction; msg)
}

fn nibble(n: u8) -> Result<u8> {
    if n > 0xF {
        Err(illegal("OPERAND IS NOT A NIBBLE"))
    } else {
        Ok(n)
    }
}

fn get_nn(hi: u8, lo: u8) -> Result<u8> {
    Ok(nibble(hi)? << 4 | nibble(lo)?)
}

fn get_nnn(a: u8, b: u8, c: u8) -> Result<Address> {
    Ok((nibble(a)? as Address) << 8 | (nibble(b)? as Address) << 4 | nibble(c)? as Address)
}

fn register(id: u8) -> Result<Register> {
    Register::from_id(id).ok_or_else(|| illegal("NO SUCH REGISTER"))
}

fn comparison(id: u8) -> Result<Comparison> {
    Comparison::from_id(id).ok_or_else(|| illegal("NO SUCH COMPARISON"))
}

impl Opcode {
    pub fn encode(&self) -> [u8; SLOT] {
        use Opcode::*;
        match *self {
            Halt => [tag::HALT, 0, 0, 0],
            Jump(addr) => nnn(tag::JUMP, addr),
            Print(r) => [tag::PRINT, r.id(), 0, 0],
            Clear(n) => nn(tag::CLEAR, 0, n),
            Color(n) => nn(tag::COLOR, 0, n),
            Sprite(addr) => nnn(tag::SPRITE, addr),
            SpriteIndex(n) => nn(tag::SPRITE_INDEX, 0, n),
            Assign(op, dst, src) => [tag::ASSIGN, op.id(), dst.id(), src.id()],
            SetLiteral(r, n) => nn(tag::SET_LITERAL, r.id(), n),
            AddLiteral(r, n) => nn(tag::ADD_LITERAL, r.id(), n),
            Random(r, n) => nn(tag::RANDOM, r.id(), n),
            IfRegister(cmp, lhs, rhs) => [tag::IF_REGISTER, cmp.id(), lhs.id(), rhs.id()],
            IfLiteral(cmp, r, n) => nn(tag::IF_LITERAL, cmp.id() << 4 | r.id(), n),
            IfKey(key) => [tag::IF_KEY, key.id(), 0, 0],
        }
    }

    pub fn decode(slot: &[u8]) -> Result<Opcode> {
        use Opcode::*;
        let (t, a, b, c) = match slot {
            [t, a, b, c, ..] => (*t, *a, *b, *c),
            _ => return Err(illegal("TRUNCATED SLOT")),
        };
        let op = match t {
            tag::HALT => Halt,
            tag::JUMP => Jump(get_nnn(a, b, c)?),
            tag::PRINT => Print(register(a)?),
            tag::CLEAR => Clear(get_nn(b, c)?),
            tag::COLOR => Color(get_nn(b, c)?),
            tag::SPRITE => Sprite(get_nnn(a, b, c)?),
            tag::SPRITE_INDEX => SpriteIndex(get_nn(b, c)?),
            tag::ASSIGN => {
                let op = Operator::from_id(a).ok_or_else(|| illegal("NO SUCH OPERATOR"))?;
                Assign(op, register(b)?, register(c)?)
            }
            tag::SET_LITERAL => SetLiteral(register(a)?, get_nn(b, c)?),
            tag::ADD_LITERAL => AddLiteral(register(a)?, get_nn(b, c)?),
            tag::RANDOM => Random(register(a)?, get_nn(b, c)?),
            tag::IF_REGISTER => IfRegister(comparison(a)?, register(b)?, register(c)?),
            tag::IF_LITERAL => IfLiteral(comparison(a >> 4)?, register(a & 0xF)?, get_nn(b, c)?),
            tag::IF_KEY => IfKey(Key::from_id(a).ok_or_else(|| illegal("NO SUCH KEY"))?),
            _ => return Err(illegal("UNKNOWN OPCODE")),
        };
        Ok(op)
    }

    /// The address operand of instructions the fixup pass rewrites.
    pub fn address(&self) -> Option<Address> {
        match self {
            Opcode::Jump(addr) | Opcode::Sprite(addr) => Some(*addr),
            _ => None,
        }
    }

    pub fn with_address(self, addr: Address) -> Opcode {
        match self {
            Opcode::Jump(_) => Opcode::Jump(addr),
            Opcode::Sprite(_) => Opcode::Sprite(addr),
            op => op,
        }
    }

    pub fn is_conditional(&self) -> bool {
        matches!(
            self,
            Opcode::IfRegister(..) | Opcode::IfLiteral(..) | Opcode::IfKey(_)
        )
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Halt => write!(f, "HALT"),
            Jump(a) => write!(f, "JUMP({})", a),
            Print(r) => write!(f, "PRINT({})", r),
            Clear(n) => write!(f, "CLEAR({})", n),
            Color(n) => write!(f, "COLOR({})", n),
            Sprite(a) => write!(f, "SPRITE({})", a),
            SpriteIndex(n) => write!(f, "SPRITE(#{})", n),
            Assign(op, dst, src) => write!(f, "ASSIGN({} {} {})", dst, op, src),
            SetLiteral(r, n) => write!(f, "SET({}, {})", r, n),
            AddLiteral(r, n) => write!(f, "ADD({}, {})", r, n),
            Random(r, n) => write!(f, "RANDOM({}, {})", r, n),
            IfRegister(cmp, lhs, rhs) => write!(f, "IF({} {} {})", lhs, cmp, rhs),
            IfLiteral(cmp, r, n) => write!(f, "IF({} {} {})", r, cmp, n),
            IfKey(key) => write!(f, "IF(KEY {})", key),
        }
    }
}
