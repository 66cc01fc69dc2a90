/*!
Reading the output of a solver run on a DIMACS file.

Two forms of output are understood.

The form of the SAT competition:
```none
c Any comment
s SATISFIABLE
v 1 -2 3
v -4 0
```

And the form written by minisat to a result file:
```none
SAT
1 -2 3 -4 0
```

An unsatisfiable verdict is `s UNSATISFIABLE`, or `UNSAT`.
Any other status, such as `s UNKNOWN`, is an error, as no conclusion may be drawn from it.

```rust
# use hcp_sat::backend::{dimacs::read_solution, Verdict};
let output = "c from some solver\ns SATISFIABLE\nv -1 2\nv 0\n";
match read_solution(output.as_bytes(), 3) {
    Ok(Verdict::Satisfiable(model)) => assert_eq!(model.as_dimacs(), "-1 2 -3 0"),
    _ => panic!("satisfiable"),
}
```
*/

use std::io::BufRead;

use crate::{
    backend::Verdict,
    misc::log::targets::{self},
    structures::{
        literal::{Lit, Literal},
        model::Model,
    },
    types::err::{self},
};

/// Reads a verdict from solver output, with any model over `variable_count` variables.
///
/// Variables not mentioned by the output are false, and a literal of any variable beyond `variable_count` is an error.
#[allow(unused_labels)]
pub fn read_solution(mut reader: impl BufRead, variable_count: usize) -> Result<Verdict, err::ErrorKind> {
    let mut buffer = String::with_capacity(1024);
    let mut line_counter = 0;

    let mut status: Option<bool> = None;
    // Whether bare lines of literals are expected, as in minisat output.
    let mut bare = false;
    let mut literals: Vec<Lit> = Vec::default();

    'line_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
        }

        let mut tokens = buffer.split_whitespace();
        match tokens.next() {
            None | Some("c") => continue,

            Some("s") => {
                let verdict = match tokens.next() {
                    Some("SATISFIABLE") => true,
                    Some("UNSATISFIABLE") => false,
                    _ => return Err(err::ErrorKind::from(err::ParseError::Status(line_counter))),
                };
                if status.replace(verdict).is_some() {
                    return Err(err::ErrorKind::from(err::ParseError::Status(line_counter)));
                }
            }

            Some("SAT") if status.is_none() => {
                status = Some(true);
                bare = true;
            }

            Some("UNSAT") if status.is_none() => status = Some(false),

            Some("v") => read_literals(tokens, line_counter, variable_count, &mut literals)?,

            Some(_) if bare => read_literals(buffer.split_whitespace(), line_counter, variable_count, &mut literals)?,

            Some(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
        }
    }

    match status {
        None => Err(err::ErrorKind::from(err::ParseError::MissingStatus)),

        Some(false) => {
            log::info!(target: targets::PARSE, "Unsatisfiable verdict read");
            Ok(Verdict::Unsatisfiable)
        }

        Some(true) => {
            log::info!(target: targets::PARSE, "Satisfiable verdict read, with {} literals", literals.len());
            Ok(Verdict::Satisfiable(Model::from_literals(variable_count, literals)))
        }
    }
}

/// Reads literals from `tokens`, each of which must be a variable of 1..=`variable_count`.
fn read_literals<'s>(
    tokens: impl Iterator<Item = &'s str>,
    line: usize,
    variable_count: usize,
    literals: &mut Vec<Lit>,
) -> Result<(), err::ErrorKind> {
    for token in tokens {
        match token.parse::<Lit>() {
            Ok(0) => {}
            Ok(literal) if literal.var() as usize <= variable_count => literals.push(literal),
            Ok(literal) => {
                log::error!(target: targets::PARSE, "Literal {literal} beyond {variable_count} variables");
                return Err(err::ErrorKind::from(err::ParseError::Literal(line)));
            }
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Literal(line))),
        }
    }
    Ok(())
}
