/*!
A reader for graphs in the DIMACS `.col` format.

```none
c A comment
p edge 4 5
e 1 2
e 2 3
e 3 4
e 4 1
e 1 3
```

- Lines beginning `c` are comments, and blank lines are skipped.
- The problem line `p <format> <vertices> <edges>` must come before any edge, and must be unique.
  The format token is not checked, as `edge`, `edges` and `col` are all seen in the wild.
- Each line beginning `e` is an edge between two vertices.

Errors note the line at which they occur.
A count of edges which does not match the problem line is noted by a warning, as the count is often approximate.

```rust
# use hcp_sat::io::col::read_col;
let col = "p edge 3 2\ne 1 2\ne 2 3\n";

let graph = read_col(col.as_bytes(), true).unwrap();
assert_eq!(graph.edge_count(), 4);

let graph = read_col(col.as_bytes(), false).unwrap();
assert_eq!(graph.edge_count(), 2);
```
*/

use std::io::BufRead;

use crate::{
    misc::log::targets::{self},
    structures::{
        graph::{Edge, Graph},
        vertex::Vertex,
    },
    types::err::{self},
};

/// Reads a graph in the DIMACS `.col` format, with each edge in both directions if `undirected`.
#[allow(unused_labels)]
pub fn read_col(mut reader: impl BufRead, undirected: bool) -> Result<Graph, err::ErrorKind> {
    let mut buffer = String::with_capacity(1024);
    let mut line_counter = 0;

    let mut expected: Option<(Vertex, usize)> = None;

    // first phase, read until the problem line
    'preamble_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
        }

        let mut tokens = buffer.split_whitespace();
        match tokens.next() {
            None | Some("c") => continue,

            Some("p") => {
                let vertex_count = tokens.nth(1).and_then(|string| string.parse::<Vertex>().ok());
                let edge_count = tokens.next().and_then(|string| string.parse::<usize>().ok());

                match (vertex_count, edge_count) {
                    (Some(vertices), Some(edges)) => expected = Some((vertices, edges)),
                    _ => {
                        return Err(err::ErrorKind::from(
                            err::ParseError::ProblemSpecification(line_counter),
                        ))
                    }
                }
                break;
            }

            Some("e") => {
                return Err(err::ErrorKind::from(err::ParseError::MisplacedProblem(
                    line_counter,
                )))
            }

            Some(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
        }
    }

    let (vertex_count, expected_edges) = match expected {
        Some(expectation) => expectation,
        None => return Err(err::ErrorKind::from(err::ParseError::MissingProblem)),
    };

    let mut edges: Vec<Edge> = Vec::with_capacity(expected_edges);

    // second phase, read edges
    'edge_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
        }

        let mut tokens = buffer.split_whitespace();
        match tokens.next() {
            None | Some("c") => continue,

            Some("e") => {
                let from = tokens.next().and_then(|string| string.parse::<Vertex>().ok());
                let to = tokens.next().and_then(|string| string.parse::<Vertex>().ok());

                match (from, to, tokens.next()) {
                    (Some(i), Some(j), None) => edges.push((i, j)),
                    _ => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
                }
            }

            Some("p") => {
                return Err(err::ErrorKind::from(err::ParseError::MisplacedProblem(
                    line_counter,
                )))
            }

            Some(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
        }
    }

    if edges.len() != expected_edges {
        log::warn!(target: targets::PARSE, "Expected {expected_edges} edges, read {}", edges.len());
    }

    let graph = match undirected {
        true => Graph::undirected(vertex_count, edges)?,
        false => Graph::new(vertex_count, edges)?,
    };

    log::info!(target: targets::PARSE, "Read {} vertices and {} arcs", graph.vertex_count(), graph.edge_count());
    Ok(graph)
}
