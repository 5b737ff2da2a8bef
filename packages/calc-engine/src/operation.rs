use crate::arithmetic;
use crate::outcome::Outcome;
use std::fmt;

/// A menu entry. The discriminant is the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Exit = 0,
    Add = 1,
    Subtract = 2,
    Multiply = 3,
    Divide = 4,
    Modulus = 5,
}

impl Operation {
    /// Order in which the entries are listed in the menu.
    pub const MENU_ORDER: [Operation; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulus,
        Self::Exit,
    ];

    pub fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            0 => Some(Self::Exit),
            1 => Some(Self::Add),
            2 => Some(Self::Subtract),
            3 => Some(Self::Multiply),
            4 => Some(Self::Divide),
            5 => Some(Self::Modulus),
            _ => None,
        }
    }

    pub fn choice(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Exit => "Exit",
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Modulus => "Modulus",
        }
    }

    /// Operator shown in the result line. Exit has none.
    pub fn symbol(self) -> Option<char> {
        match self {
            Self::Exit => None,
            Self::Add => Some('+'),
            Self::Subtract => Some('-'),
            Self::Multiply => Some('*'),
            Self::Divide => Some('/'),
            Self::Modulus => Some('%'),
        }
    }

    pub fn apply(self, first: f32, second: f32) -> Outcome {
        match self {
            Self::Exit => Outcome::Exit,
            Self::Add => arithmetic::add(first, second),
            Self::Subtract => arithmetic::subtract(first, second),
            Self::Multiply => arithmetic::multiply(first, second),
            Self::Divide => arithmetic::divide(first, second),
            Self::Modulus => arithmetic::modulus(first, second),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.choice(), self.label())
    }
}
