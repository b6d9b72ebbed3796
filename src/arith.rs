/// Externally supplied arithmetic capability. The probe only needs addition;
/// the seam exists so tests can substitute an implementation and assert the
/// printed line tracks whatever the capability returns.
pub trait Arith {
    fn add(&self, a: i32, b: i32) -> i32;
}

/// In-process implementation used by the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeArith;

impl Arith for NativeArith {
    fn add(&self, a: i32, b: i32) -> i32 {
        a + b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_add() {
        assert_eq!(NativeArith.add(5, 3), 8);
        assert_eq!(NativeArith.add(-5, 3), -2);
        assert_eq!(NativeArith.add(0, 0), 0);
    }
}
