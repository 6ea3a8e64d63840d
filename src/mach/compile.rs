use super::{Address, Link, Opcode, Program, MEMORY_SIZE, PALETTE_LEN, SLOT, SPRITE_HEIGHT, SPRITE_WIDTH};
use crate::error;
use crate::lang::token::{Comparison, Key, Operator, Register, Word};
use crate::lang::{is_number_like, lex, parse_number, Error, Lexer, Token, MAX_TOKEN_LEN};
use std::ops::RangeInclusive;

type Result<T> = std::result::Result<T, Error>;

/// Compile source text into a linked program.
///
/// The first error aborts compilation. Nothing partial is returned.
pub fn compile(source: &str) -> Result<Program> {
    Compiler::new(source).compile()
}

struct Compiler<'a> {
    lexer: Lexer<'a>,
    memory: Vec<u8>,
    lines: Vec<usize>,
    link: Link,
    line: usize,
}

impl<'a> Compiler<'a> {
    fn new(source: &'a str) -> Compiler<'a> {
        Compiler {
            lexer: lex(source),
            memory: Vec::with_capacity(MEMORY_SIZE),
            lines: vec![],
            link: Link::new(),
            line: 1,
        }
    }

    fn compile(mut self) -> Result<Program> {
        let mut data = None;
        while let Some(token) = self.scan()? {
            self.line = token.line;
            if Word::from_token(&token.text) == Some(Word::Data) {
                data = Some(token);
                break;
            }
            self.statement(&token)?;
        }
        self.write(Opcode::Halt)?;
        let code_len = self.memory.len();
        if let Some(token) = data {
            self.data(&token)?;
        }
        self.link.fixup(&mut self.memory[..code_len])?;
        self.check_code(code_len)?;
        Ok(Program::new(
            self.memory,
            code_len,
            self.lines,
            self.link.symbols(),
            self.link.undefined(),
        ))
    }

    fn statement(&mut self, token: &Token) -> Result<()> {
        if let Some(dst) = Register::from_token(&token.text) {
            return self.assign(dst);
        }
        match Word::from_token(&token.text) {
            Some(Word::Print) => {
                let reg = self.register()?;
                self.write(Opcode::Print(reg))
            }
            Some(Word::If) => self.if_compare(),
            Some(Word::Key) => self.if_key(),
            Some(Word::Label) => {
                let name = self.next_token()?;
                self.define(&name.text)
            }
            Some(Word::Goto) => {
                let name = self.next_token()?;
                let index = self.reference(&name)?;
                self.write(Opcode::Jump(index))
            }
            Some(Word::Sprite) => self.sprite(),
            Some(Word::Clear) => {
                let color = self.palette()?;
                self.write(Opcode::Clear(color))
            }
            Some(Word::Color) => {
                let color = self.palette()?;
                self.write(Opcode::Color(color))
            }
            _ => Err(error!(SyntaxError, token.line_number(), ..&token.col; "UNKNOWN INSTRUCTION")),
        }
    }

    // r op r | r = N | r += N | r = random N
    fn assign(&mut self, dst: Register) -> Result<()> {
        let token = self.next_token()?;
        let op = match Operator::from_token(&token.text) {
            Some(op) => op,
            None => {
                return Err(error!(SyntaxError, token.line_number(), ..&token.col; "EXPECTED ASSIGNMENT"))
            }
        };
        let rhs = self.next_token()?;
        if let Some(src) = Register::from_token(&rhs.text) {
            return self.write(Opcode::Assign(op, dst, src));
        }
        match op {
            Operator::Set if Word::from_token(&rhs.text) == Some(Word::Random) => {
                let token = self.next_token()?;
                let bound = self.literal(&token, 1..=255)?;
                self.write(Opcode::Random(dst, bound as u8))
            }
            Operator::Set => {
                let n = self.byte(&rhs)?;
                self.write(Opcode::SetLiteral(dst, n))
            }
            Operator::Add => {
                let n = self.byte(&rhs)?;
                self.write(Opcode::AddLiteral(dst, n))
            }
            _ => Err(error!(SyntaxError, rhs.line_number(), ..&rhs.col; "EXPECTED REGISTER")),
        }
    }

    // if r cmp r then | if r cmp N then
    fn if_compare(&mut self) -> Result<()> {
        let lhs = self.register()?;
        let token = self.next_token()?;
        let cmp = match Comparison::from_token(&token.text) {
            Some(cmp) => cmp,
            None => {
                return Err(error!(SyntaxError, token.line_number(), ..&token.col; "EXPECTED COMPARISON"))
            }
        };
        let rhs = self.next_token()?;
        let op = match Register::from_token(&rhs.text) {
            Some(rhs) => Opcode::IfRegister(cmp, lhs, rhs),
            None => match cmp {
                Comparison::Eq | Comparison::NotEq => Opcode::IfLiteral(cmp, lhs, self.byte(&rhs)?),
                _ => {
                    return Err(error!(SyntaxError, token.line_number(), ..&token.col;
                        "LITERALS COMPARE WITH == OR != ONLY"))
                }
            },
        };
        self.expect(Word::Then)?;
        self.write(op)
    }

    // key k then
    fn if_key(&mut self) -> Result<()> {
        let token = self.next_token()?;
        let key = match Key::from_token(&token.text) {
            Some(key) => key,
            None => return Err(error!(SyntaxError, token.line_number(), ..&token.col; "EXPECTED KEY")),
        };
        self.expect(Word::Then)?;
        self.write(Opcode::IfKey(key))
    }

    // sprite NAME | sprite N
    fn sprite(&mut self) -> Result<()> {
        let token = self.next_token()?;
        if is_number_like(&token.text) {
            let n = self.literal(&token, 0..=255)?;
            self.write(Opcode::SpriteIndex(n as u8))
        } else {
            let index = self.reference(&token)?;
            self.write(Opcode::Sprite(index))
        }
    }

    /// Everything after `data` is bitmap rows and `: NAME` lines.
    fn data(&mut self, token: &Token) -> Result<()> {
        let (tail, lines) = self.lexer.remainder();
        if !tail.trim().is_empty() {
            return Err(error!(SyntaxError, token.line_number(); "DATA MUST END ITS LINE"));
        }
        let mut rows: Vec<u8> = Vec::with_capacity(SPRITE_HEIGHT);
        for (line, text) in lines {
            self.line = line;
            let text = text.trim_end();
            if text.is_empty() {
                continue;
            }
            if let Some(name) = text.trim_start().strip_prefix(':') {
                if !rows.is_empty() {
                    return Err(error!(SyntaxError, Some(line); "INCOMPLETE SPRITE"));
                }
                let name = name.trim();
                if name.is_empty() {
                    return Err(error!(MissingToken, Some(line)));
                }
                if name.chars().count() > MAX_TOKEN_LEN {
                    return Err(error!(TokenTooLong, Some(line)));
                }
                self.define(name)?;
                continue;
            }
            rows.push(bitmap_row(text).map_err(|e| e.in_line_number(Some(line)))?);
            if rows.len() == SPRITE_HEIGHT {
                let mut slot = [0; SLOT];
                slot.copy_from_slice(&rows);
                self.write_slot(slot)?;
                rows.clear();
            }
        }
        if rows.is_empty() {
            Ok(())
        } else {
            Err(error!(SyntaxError, Some(self.line); "INCOMPLETE SPRITE"))
        }
    }

    /// Every path through the code has to end at the final `Halt`.
    fn check_code(&self, code_len: usize) -> Result<()> {
        let count = (self.memory.len() - code_len) / SLOT;
        let halt = code_len - SLOT;
        for (slot, bytes) in self.memory[..code_len].chunks_exact(SLOT).enumerate() {
            let line = Some(self.lines[slot]);
            let op = Opcode::decode(bytes)?;
            match op {
                Opcode::SpriteIndex(n) if n as usize >= count => {
                    let msg = format!("{} SPRITES DEFINED", count);
                    return Err(error!(UndefinedSprite, line; &msg));
                }
                Opcode::Jump(addr) if addr as usize >= code_len => {
                    return Err(error!(SyntaxError, line; "GOTO INTO DATA"));
                }
                _ if op.is_conditional() && slot * SLOT + SLOT == halt => {
                    return Err(error!(SyntaxError, line; "CONDITION GUARDS NOTHING"));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn scan(&mut self) -> Result<Option<Token>> {
        match self.lexer.next() {
            Some(token) if token.len() > MAX_TOKEN_LEN => {
                Err(error!(TokenTooLong, token.line_number(), ..&token.col))
            }
            token => Ok(token),
        }
    }

    fn next_token(&mut self) -> Result<Token> {
        match self.scan()? {
            Some(token) => Ok(token),
            None => Err(error!(MissingToken, Some(self.line))),
        }
    }

    fn expect(&mut self, word: Word) -> Result<()> {
        let token = self.next_token()?;
        if Word::from_token(&token.text) == Some(word) {
            Ok(())
        } else {
            let msg = format!("EXPECTED {}", word.as_str().to_ascii_uppercase());
            Err(error!(SyntaxError, token.line_number(), ..&token.col; &msg))
        }
    }

    fn register(&mut self) -> Result<Register> {
        let token = self.next_token()?;
        match Register::from_token(&token.text) {
            Some(reg) => Ok(reg),
            None => Err(error!(SyntaxError, token.line_number(), ..&token.col; "EXPECTED REGISTER")),
        }
    }

    fn literal(&self, token: &Token, range: RangeInclusive<i64>) -> Result<i64> {
        let n = parse_number(&token.text)
            .map_err(|e| e.in_line_number(token.line_number()).in_column(&token.col))?;
        if range.contains(&n) {
            Ok(n)
        } else {
            let msg = format!("EXPECTED {} TO {}", range.start(), range.end());
            Err(error!(Overflow, token.line_number(), ..&token.col; &msg))
        }
    }

    /// Register literals. Negative values wrap to their two's complement.
    fn byte(&self, token: &Token) -> Result<u8> {
        Ok(self.literal(token, -128..=255)? as u8)
    }

    fn palette(&mut self) -> Result<u8> {
        let token = self.next_token()?;
        Ok(self.literal(&token, 0..=PALETTE_LEN as i64 - 1)? as u8)
    }

    fn cursor(&self) -> Result<Address> {
        if self.memory.len() >= MEMORY_SIZE {
            Err(error!(OutOfMemory, Some(self.line)))
        } else {
            Ok(self.memory.len() as Address)
        }
    }

    fn define(&mut self, name: &str) -> Result<()> {
        let addr = self.cursor()?;
        match self.link.define(name, addr) {
            Ok(_) => Ok(()),
            Err(e) => Err(e.in_line_number(Some(self.line))),
        }
    }

    fn reference(&mut self, token: &Token) -> Result<Address> {
        match self.link.resolve_or_create(&token.text) {
            Ok(index) => Ok(index as Address),
            Err(e) => Err(e.in_line_number(token.line_number()).in_column(&token.col)),
        }
    }

    fn write(&mut self, op: Opcode) -> Result<()> {
        self.write_slot(op.encode())
    }

    fn write_slot(&mut self, slot: [u8; SLOT]) -> Result<()> {
        if self.memory.len() + SLOT > MEMORY_SIZE {
            return Err(error!(OutOfMemory, Some(self.line)));
        }
        self.memory.extend_from_slice(&slot);
        self.lines.push(self.line);
        Ok(())
    }
}

fn bitmap_row(text: &str) -> Result<u8> {
    if text.chars().count() > SPRITE_WIDTH {
        return Err(error!(TokenTooLong; "BITMAP ROWS ARE 8 PIXELS"));
    }
    Ok(text
        .chars()
        .enumerate()
        .filter(|(_, c)| *c == 'x')
        .fold(0u8, |row, (i, _)| row | 0x80u8 >> i))
}
