/*!
A model, aka. a total function from variables to truth values.

The canonical representation of a model is as a vector of booleans, where each index of the vector above zero is interpreted as a variable.
The zero index is unused, as no variable is zero.

A model is expected to be *total* on the variables of an encoding, and so asking for the value of any variable beyond the model returns nothing rather than some default.

```rust
# use hcp_sat::structures::model::Model;
let model = Model::from_literals(3, [-1, 2]);

assert_eq!(model.variable_count(), 3);
assert_eq!(model.value_of(2), Some(true));
assert_eq!(model.value_of(3), Some(false));
assert_eq!(model.value_of(4), None);
assert_eq!(model.as_dimacs(), "-1 2 -3 0");
```

Variables not mentioned when building a model from literals are false, as a solver is free to leave variables which occur in no clause without a value.
*/

use crate::structures::literal::{Lit, Literal, Var};

/// A total assignment to variables 1..=variable_count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    values: Vec<bool>,
}

impl Model {
    /// A model of `variable_count` variables, with every variable false.
    pub fn new(variable_count: usize) -> Self {
        Model {
            values: vec![false; variable_count + 1],
        }
    }

    /// A model of at least `variable_count` variables, where each literal given is true.
    ///
    /// The model is extended to cover any variable beyond `variable_count` which is given.
    pub fn from_literals(variable_count: usize, literals: impl IntoIterator<Item = Lit>) -> Self {
        let mut model = Model::new(variable_count);
        for literal in literals {
            model.set(literal.var(), literal.polarity());
        }
        model
    }

    /// A count of variables in the model.
    pub fn variable_count(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// The value of a variable, if the variable is part of the model.
    pub fn value_of(&self, var: Var) -> Option<bool> {
        match var {
            0 => None,
            _ => self.values.get(var as usize).copied(),
        }
    }

    /// The value of a literal, if the variable of the literal is part of the model.
    pub fn literal_value(&self, literal: Lit) -> Option<bool> {
        self.value_of(literal.var())
            .map(|value| value == literal.polarity())
    }

    /// Sets the value of `var`, extending the model if required.
    pub fn set(&mut self, var: Var, value: bool) {
        if var == 0 {
            return;
        }
        let index = var as usize;
        if index >= self.values.len() {
            self.values.resize(index + 1, false);
        }
        self.values[index] = value;
    }

    /// An iterator through all variables paired with their value.
    pub fn var_value_pairs(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.values
            .iter()
            .enumerate()
            .skip(1)
            .map(|(var, value)| (var as Var, *value))
    }

    /// An iterator through the literal of each variable, true on the model.
    pub fn literals(&self) -> impl Iterator<Item = Lit> + '_ {
        self.var_value_pairs()
            .map(|(var, value)| Lit::new(var, value))
    }

    /// The model as a DIMACS string, terminated by `0`.
    pub fn as_dimacs(&self) -> String {
        let mut the_string = String::default();
        for literal in self.literals() {
            the_string.push_str(&format!("{literal} "));
        }
        the_string.push('0');
        the_string
    }
}
