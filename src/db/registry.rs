/*!
The variable registry, which issues a variable for each thing of interest to an encoding.

Each variable is issued against a [VarKey], which pairs a [VarKind] with the vertices, edge, or bit the variable stands for.
- Allocating a key seen before returns the variable issued for the key.
- Allocating a fresh key issues the next unused variable, starting from 1.

So, the map from keys to variables is injective, and grows without reassigning or reusing any variable.

```rust
# use hcp_sat::db::registry::{VarKey, VariableRegistry};
let mut registry = VariableRegistry::default();

let h = registry.allocate(VarKey::Arc((1, 2))).unwrap();
let p = registry.allocate(VarKey::Rank(2, 0)).unwrap();

assert_eq!((h, p), (1, 2));
assert_eq!(registry.allocate(VarKey::Arc((1, 2))), Ok(h));
assert_eq!(registry.describe(p), Some(VarKey::Rank(2, 0)));
assert_eq!(registry.count(), 2);
```

# Notes
- Adder variables are keyed by edge *and* bit, so no auxiliary variable is shared between two gadgets, or two bits of a gadget.
- The only failure is exhausting the supply of variables (see [VAR_MAX]), which would require a graph far beyond the reach of any solver.
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        graph::Edge,
        literal::{Var, VAR_MAX},
        rank::Bit,
        vertex::Vertex,
    },
    types::err::{self},
};

/// The kinds of variable issued by a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VarKind {
    /// Whether an arc is part of the cycle.
    Arc,

    /// A bit of the rank register of a vertex.
    Rank,

    /// A sum bit of a ripple-carry adder.
    AdderSum,

    /// A carry bit of a ripple-carry adder.
    AdderCarry,
}

/// A key against which a variable is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VarKey {
    /// The arc variable of an edge.
    Arc(Edge),

    /// A bit of the rank register of a vertex.
    Rank(Vertex, Bit),

    /// The sum at a bit of the adder on an edge.
    AdderSum(Edge, Bit),

    /// The carry out of a bit of the adder on an edge.
    AdderCarry(Edge, Bit),
}

impl VarKey {
    /// The kind of variable the key is for.
    pub fn kind(&self) -> VarKind {
        match self {
            Self::Arc(_) => VarKind::Arc,
            Self::Rank(_, _) => VarKind::Rank,
            Self::AdderSum(_, _) => VarKind::AdderSum,
            Self::AdderCarry(_, _) => VarKind::AdderCarry,
        }
    }
}

impl std::fmt::Display for VarKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arc((i, j)) => write!(f, "H({i},{j})"),
            Self::Rank(i, b) => write!(f, "P({i},{b})"),
            Self::AdderSum((i, j), b) => write!(f, "S({i},{j};{b})"),
            Self::AdderCarry((i, j), b) => write!(f, "C({i},{j};{b})"),
        }
    }
}

/// The variable registry.
#[derive(Clone, Debug)]
pub struct VariableRegistry {
    /// The variable issued for each key.
    ids: HashMap<VarKey, Var>,

    /// The key of each variable, indexed by the variable less one.
    keys: Vec<VarKey>,

    /// The largest variable which may be issued.
    limit: Var,
}

impl Default for VariableRegistry {
    fn default() -> Self {
        VariableRegistry {
            ids: HashMap::default(),
            keys: Vec::default(),
            limit: VAR_MAX,
        }
    }
}

impl VariableRegistry {
    /// A registry which issues at most `limit` variables.
    pub fn with_limit(limit: Var) -> Self {
        VariableRegistry {
            limit: limit.min(VAR_MAX),
            ..Default::default()
        }
    }

    /// The variable of `key`, issuing a fresh variable if `key` has not been seen.
    pub fn allocate(&mut self, key: VarKey) -> Result<Var, err::RegistryError> {
        if let Some(var) = self.ids.get(&key) {
            return Ok(*var);
        }

        let var = match Var::try_from(self.keys.len() + 1) {
            Ok(var) if var <= self.limit => var,
            _ => {
                log::error!(target: targets::REGISTRY, "Exhausted at {key}");
                return Err(err::RegistryError::IdsExhausted);
            }
        };

        self.ids.insert(key, var);
        self.keys.push(key);
        log::trace!(target: targets::REGISTRY, "{var} := {key}");
        Ok(var)
    }

    /// The variable of `key`, if one has been issued.
    pub fn get(&self, key: VarKey) -> Option<Var> {
        self.ids.get(&key).copied()
    }

    /// Whether a variable has been issued for `key`.
    pub fn contains(&self, key: VarKey) -> bool {
        self.ids.contains_key(&key)
    }

    /// The key a variable was issued for, if the variable has been issued.
    pub fn describe(&self, var: Var) -> Option<VarKey> {
        match var {
            0 => None,
            _ => self.keys.get(var as usize - 1).copied(),
        }
    }

    /// A count of variables issued, which is also the largest variable issued.
    pub fn count(&self) -> usize {
        self.keys.len()
    }

    /// A count of variables issued of the given kind.
    pub fn count_of(&self, kind: VarKind) -> usize {
        self.keys.iter().filter(|key| key.kind() == kind).count()
    }

    /// An iterator over each edge with an arc variable, paired with the variable, in order of issue.
    pub fn arcs(&self) -> impl Iterator<Item = (Edge, Var)> + '_ {
        self.keys
            .iter()
            .enumerate()
            .filter_map(|(index, key)| match key {
                VarKey::Arc(edge) => Some((*edge, index as Var + 1)),
                _ => None,
            })
    }
}
