// src/dpda/tables/symbols.rs

use std::{fmt, str::FromStr};

/// Input end-marker.
pub const END: char = '$';
/// Printed in place of an absent lookahead, stack top, or push sequence.
pub const EPS: &str = "ε";

/// Generates `ALL`, `name`, `Display` and `FromStr` for a closed symbol set.
macro_rules! symbol_set {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, String> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(format!(
                        "unknown {} {s:?}, expected one of {:?}",
                        stringify!($ty),
                        [$($name),+]
                    )),
                }
            }
        }
    };
}

/// Control states (Q).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum State {
    /// Before the stack is seeded.
    Pre,
    /// Driver: dispatches on lookahead.
    Drive,
    // gates: entered only to remember which lookahead was seen
    GateA,
    GateB,
    GateEnd,
    Accept,
}

symbol_set!(State {
    Pre => "p",
    Drive => "q",
    GateA => "qa",
    GateB => "qb",
    GateEnd => "q$",
    Accept => "q_accept",
});

/// Input alphabet (Σ), end-marker included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Input {
    A,
    B,
    End,
}

symbol_set!(Input {
    A => "a",
    B => "b",
    End => "$",
});

impl Input {
    #[inline]
    pub fn from_char(c: char) -> Option<Input> {
        match c {
            'a' => Some(Input::A),
            'b' => Some(Input::B),
            END => Some(Input::End),
            _ => None,
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Input::A => 'a',
            Input::B => 'b',
            Input::End => END,
        }
    }
}

/// Stack alphabet (Γ): the two terminals, the start symbol, and the bottom marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StackSymbol {
    A,
    B,
    S,
    Bottom,
}

symbol_set!(StackSymbol {
    A => "a",
    B => "b",
    S => "S",
    Bottom => "⊥",
});

/// Grammar productions of S → aSb | ε, used to tag expansion steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Production {
    Expand,
    Erase,
}

symbol_set!(Production {
    Expand => "S→aSb",
    Erase => "S→ε",
});

/// Renders an optional symbol, with `None` printed as ε.
pub struct OrEps<T>(pub Option<T>);

impl<T: fmt::Display> fmt::Display for OrEps<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(v) => v.fmt(f),
            None => f.pad(EPS),
        }
    }
}
