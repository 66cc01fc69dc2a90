/*!
(The representation of) a vertex.

Each vertex of a graph on *n* vertices is a u32 in 1..=*n*.
There is no payload beyond identity.

Vertex 1 is distinguished as the *start* of any cycle.
Every Hamiltonian cycle passes through the start, so fixing the start removes the *n* rotations of a cycle from consideration, and gives positions along the cycle a fixed origin.
*/

/// A vertex.
pub type Vertex = u32;

/// The vertex from which every cycle is read, and which is fixed at rank 1.
pub const START: Vertex = 1;
