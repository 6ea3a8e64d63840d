//! Closed vocabularies of the language.
//!
//! Every class is recognized by exact string match only. A token that
//! is not part of a vocabulary yields `None`, never a guess.

macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn from_token(s: &str) -> Option<$name> {
                match s {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Operand byte used in the bytecode.
            pub fn id(self) -> u8 {
                self as u8
            }

            pub fn from_id(id: u8) -> Option<$name> {
                $name::ALL.get(id as usize).copied()
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

vocabulary! {
    /// 8-bit registers. `tick` counts completed runs and `ink` is the
    /// draw color; both may also be read and written like the others.
    Register {
        X => "x",
        Y => "y",
        Z => "z",
        W => "w",
        A => "a",
        B => "b",
        C => "c",
        D => "d",
        E => "e",
        F => "f",
        T => "t",
        Tick => "tick",
        Ink => "ink",
    }
}

impl Register {
    pub const COUNT: usize = Register::ALL.len();
}

vocabulary! {
    /// Register to register assignment operators.
    Operator {
        Set => "=",
        Add => "+=",
        Sub => "-=",
        Mul => "*=",
        Div => "/=",
        Mod => "%=",
        And => "&=",
        Or => "|=",
        Xor => "^=",
    }
}

vocabulary! {
    Comparison {
        Eq => "==",
        NotEq => "!=",
        Lt => "<",
        LtEq => "<=",
        Gt => ">",
        GtEq => ">=",
    }
}

impl Comparison {
    pub fn eval(self, lhs: u8, rhs: u8) -> bool {
        use Comparison::*;
        match self {
            Eq => lhs == rhs,
            NotEq => lhs != rhs,
            Lt => lhs < rhs,
            LtEq => lhs <= rhs,
            Gt => lhs > rhs,
            GtEq => lhs >= rhs,
        }
    }
}

vocabulary! {
    Key {
        Action => "action",
        Up => "up",
        Down => "down",
        Left => "left",
        Right => "right",
    }
}

vocabulary! {
    /// Statement keywords.
    Word {
        Print => "print",
        If => "if",
        Then => "then",
        Key => "key",
        Label => ":",
        Goto => "goto",
        Sprite => "sprite",
        Clear => "clear",
        Color => "color",
        Random => "random",
        Data => "data",
    }
}
