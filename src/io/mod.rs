/*!
Reading graphs.

Graphs are read from the DIMACS `.col` format, see [col].

Whether a graph file is compressed is a matter for whatever opens the file.
For example, the `hcp_cli` binary reads files ending `.xz` through [xz2](https://docs.rs/xz2/latest/xz2/) when built with the `xz` feature.
*/

pub mod col;
