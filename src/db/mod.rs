/*!
Databases for holding information relevant to an encoding.

- The [registry] of variables, recording what each variable of an encoding stands for.
- The [formula], an append-only sequence of clauses.

Both are created fresh for each encoding, filled as the encoding is written, and hold nothing from one graph to the next.
*/

pub mod formula;
pub mod registry;
