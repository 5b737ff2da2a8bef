use crate::operation::Operation;
use crate::outcome::Outcome;

/// Wraps a computed value with the operator its menu entry displays.
fn computed(op: Operation, value: f32) -> Outcome {
    match op.symbol() {
        Some(operator) => Outcome::success(value, operator),
        None => Outcome::UnknownError,
    }
}

pub fn add(first: f32, second: f32) -> Outcome {
    computed(Operation::Add, first + second)
}

pub fn subtract(first: f32, second: f32) -> Outcome {
    computed(Operation::Subtract, first - second)
}

pub fn multiply(first: f32, second: f32) -> Outcome {
    computed(Operation::Multiply, first * second)
}

/// Exact comparison against zero; there is no epsilon.
pub fn divide(first: f32, second: f32) -> Outcome {
    if second == 0.0 {
        return Outcome::DivideByZero;
    }
    computed(Operation::Divide, first / second)
}

/// Integer remainder of both operands truncated toward zero.
///
/// A zero *dividend* is rejected as `ModuloZero`. Fractions are discarded before
/// the remainder is taken, so `7.5 % 2.9` is `7 % 2`. A divisor that truncates
/// to zero has no remainder and is reported as `DivideByZero`. Casts saturate:
/// NaN becomes 0 and infinities clamp to the `i32` range.
pub fn modulus(first: f32, second: f32) -> Outcome {
    if first == 0.0 {
        return Outcome::ModuloZero;
    }

    let dividend = first as i32;
    let divisor = second as i32;
    if divisor == 0 {
        return Outcome::DivideByZero;
    }

    // wrapping_rem keeps i32::MIN % -1 at 0 instead of overflowing
    computed(Operation::Modulus, dividend.wrapping_rem(divisor) as f32)
}

/// Maps a raw menu number to its operation and applies it.
///
/// 0 yields `Exit` without looking at the operands. Numbers outside the menu
/// yield `UnknownError`; the loop validates choices first, so that branch is
/// only reached by callers that skip validation.
pub fn perform_calculation(choice: i32, first: f32, second: f32) -> Outcome {
    match Operation::from_choice(choice) {
        Some(op) => op.apply(first, second),
        None => Outcome::UnknownError,
    }
}
