use std::{
    ffi::OsString,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use hcp_sat::{context::Context, structures::graph::Graph, types::err::ErrorKind};

pub(super) enum ReadError {
    NoPath,
    ParseError(ErrorKind),
    UnknownExtension(OsString),
    FailedToOpen,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::NoPath => write!(f, "Some path to a graph is required."),
            Self::ParseError(err) => write!(f, "Parse error: '{err}'."),
            Self::UnknownExtension(ex) => write!(f, "Unsupported extension '{ex:?}'."),
            Self::FailedToOpen => write!(f, "Failed to open file."),
        }
    }
}

/// A buffered reader of the file at `path`, decompressing files ending `.xz` when built with the `xz` feature.
pub(super) fn open(path: &Path) -> Result<Box<dyn BufRead>, ReadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            Ok(Box::new(BufReader::new(xz2::read::XzDecoder::new(file))))
        }

        #[cfg(not(feature = "xz"))]
        Some(extension) if extension == "xz" => {
            Err(ReadError::UnknownExtension(extension.to_owned()))
        }

        Some(_) | None => Ok(Box::new(BufReader::new(file))),
    }
}

/// Reads the DIMACS `.col` graph at `path` and writes a report.
pub(super) fn read_graph(path: Option<&String>, context: &Context) -> Result<Graph, ReadError> {
    let path = match path {
        Some(path) => Path::new(path),
        None => return Err(ReadError::NoPath),
    };

    println!("c Reading DIMACS graph from {path:?}");

    let graph = match context.read_graph(open(path)?) {
        Ok(graph) => graph,
        Err(e) => return Err(ReadError::ParseError(e)),
    };

    println!("c Vertex count:     {}", graph.vertex_count());
    println!("c Arc count:        {}", graph.edge_count());

    Ok(graph)
}
