//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the execute stage. It
//! handles wrapping add/subtract, AND, set-less-than and shifts on 32-bit
//! words, plus the multiply/divide operations whose widened results are
//! latched into the `hi`/`lo` halves.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div
//! - [`logic`]:      And, Slt
//! - [`shifts`]:     Sll, Sra

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, slt).
pub mod logic;

/// Shift operations (sll, sra).
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Integer ALU.
///
/// The only state is the pair of halves produced by the last multiply or
/// divide, readable through [`Alu::hi`] and [`Alu::lo`] until the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Alu {
    hi: u32,
    lo: u32,
}

impl Alu {
    /// Creates an ALU with cleared `hi`/`lo` halves.
    pub const fn new() -> Self {
        Self { hi: 0, lo: 0 }
    }

    /// Executes an ALU operation.
    ///
    /// For `Mul` and `Div` the returned value is the low half (product low
    /// word or quotient); both halves are also latched.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::core::pipeline::signals::AluOp;
    ///
    /// let mut alu = Alu::new();
    /// assert_eq!(alu.execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(alu.execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    ///
    /// let lo = alu.execute(AluOp::Mul, 0x10000, 0x10000);
    /// assert_eq!(lo, 0);
    /// assert_eq!((alu.hi(), alu.lo()), (1, 0));
    /// ```
    pub const fn execute(&mut self, op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::add_sub(op, a, b),
            AluOp::Mul => {
                let (hi, lo) = arithmetic::multiply(a, b);
                self.hi = hi;
                self.lo = lo;
                lo
            }
            AluOp::Div => {
                let (hi, lo) = arithmetic::divide(a, b);
                self.hi = hi;
                self.lo = lo;
                lo
            }
            AluOp::And | AluOp::Slt => logic::execute(op, a, b),
            AluOp::Sll | AluOp::Sra => shifts::execute(op, a, b),
        }
    }

    /// Upper half of the last multiply, or the remainder of the last divide.
    pub const fn hi(&self) -> u32 {
        self.hi
    }

    /// Lower half of the last multiply, or the quotient of the last divide.
    pub const fn lo(&self) -> u32 {
        self.lo
    }
}
