/*!
Variables, and literals as variables paired with a (boolean) polarity.

Each variable is a u32 *v* with 0 < *v* ≤ [VAR_MAX], issued by the [registry](crate::db::registry).
The representation of a literal is an integer, with the sign of the integer indicating polarity, as in DIMACS.

```rust
# use hcp_sat::structures::literal::{Lit, Literal};
let literal = Lit::new(79, true);

assert!(literal.polarity());
assert_eq!(literal.var(), 79);
assert!(!literal.negate().polarity());
assert_eq!(literal.negate().var(), 79);
```

Variable 0 is never issued, as zero terminates a clause in DIMACS.
*/

/// A variable, aka. an 'atom'.
pub type Var = u32;

/// The maximum variable, limited by the representation of literals.
pub const VAR_MAX: Var = i32::MAX.unsigned_abs();

/// The representation of a literal as a signed integer.
pub type Lit = i32;

/// Something which has methods for returning a variable and a polarity, etc.
pub trait Literal {
    /// A fresh literal, specified by pairing a variable with a boolean.
    fn new(var: Var, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The variable of the literal.
    fn var(&self) -> Var;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

impl Literal for Lit {
    fn new(var: Var, polarity: bool) -> Self {
        match polarity {
            true => var as Lit,
            false => -(var as Lit),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn var(&self) -> Var {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}
