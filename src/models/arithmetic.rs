//! Generated arithmetic problems for the math drill.
//!
//! Problems are typed `lhs <op> rhs` records evaluated directly:
//! - subtraction at the easy level orders its operands so the result stays non-negative
//! - division is built from divisor × quotient so every answer is a whole number
//! - powers only appear at the hard level, with exponents of 2 or 3

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "÷",
            Operator::Power => "^",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrillLevel {
    Easy,
    Medium,
    Hard,
    Marathon,
}

impl DrillLevel {
    pub fn label(self) -> &'static str {
        match self {
            DrillLevel::Easy => "EASY",
            DrillLevel::Medium => "MEDIUM",
            DrillLevel::Hard => "HARD",
            DrillLevel::Marathon => "MARATHON",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArithmeticProblem {
    pub lhs: i64,
    pub operator: Operator,
    pub rhs: i64,
}

impl ArithmeticProblem {
    pub fn new(lhs: i64, operator: Operator, rhs: i64) -> Self {
        Self { lhs, operator, rhs }
    }

    /// Integer result. Division truncates, although generated problems always divide evenly.
    pub fn evaluate(&self) -> i64 {
        match self.operator {
            Operator::Add => self.lhs + self.rhs,
            Operator::Subtract => self.lhs - self.rhs,
            Operator::Multiply => self.lhs * self.rhs,
            Operator::Divide => self.lhs / self.rhs,
            Operator::Power => self.lhs.pow(self.rhs as u32),
        }
    }

    pub fn generate<R: Rng + ?Sized>(level: DrillLevel, rng: &mut R) -> Self {
        match level {
            DrillLevel::Easy => Self::easy(rng),
            DrillLevel::Medium | DrillLevel::Marathon => Self::medium(rng),
            DrillLevel::Hard => Self::hard(rng),
        }
    }

    fn easy<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let operator = pick(rng, &[Operator::Add, Operator::Subtract]);
        let a: i64 = rng.gen_range(1..=100);
        let b: i64 = rng.gen_range(1..=100);
        match operator {
            Operator::Subtract => Self::new(a.max(b), operator, a.min(b)),
            _ => Self::new(a, operator, b),
        }
    }

    fn medium<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let ops = [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ];
        match pick(rng, &ops) {
            Operator::Multiply => {
                Self::new(rng.gen_range(10..=50), Operator::Multiply, rng.gen_range(2..=12))
            }
            Operator::Divide => Self::division(rng, 2..=20, 2..=50),
            operator => Self::new(rng.gen_range(50..=500), operator, rng.gen_range(10..=200)),
        }
    }

    fn hard<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let ops = [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
            Operator::Power,
        ];
        match pick(rng, &ops) {
            Operator::Power => Self::new(rng.gen_range(2..=15), Operator::Power, rng.gen_range(2..=3)),
            Operator::Multiply => {
                Self::new(rng.gen_range(20..=100), Operator::Multiply, rng.gen_range(10..=50))
            }
            Operator::Divide => Self::division(rng, 5..=50, 10..=100),
            operator => Self::new(rng.gen_range(100..=1000), operator, rng.gen_range(100..=1000)),
        }
    }

    fn division<R: Rng + ?Sized>(
        rng: &mut R,
        divisors: std::ops::RangeInclusive<i64>,
        quotients: std::ops::RangeInclusive<i64>,
    ) -> Self {
        let divisor = rng.gen_range(divisors);
        let quotient = rng.gen_range(quotients);
        Self::new(divisor * quotient, Operator::Divide, divisor)
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, ops: &[Operator]) -> Operator {
    // Callers never pass an empty slice.
    ops.choose(rng).copied().unwrap_or(Operator::Add)
}

impl fmt::Display for ArithmeticProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operator.symbol(), self.rhs)
    }
}
