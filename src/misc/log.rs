/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when examining an encoding, or a model which failed to decode.

Note, no log implementation is provided by the library.
The `hcp_cli` binary installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `logger` feature.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [variable registry](crate::db::registry)
    pub const REGISTRY: &str = "registry";

    /// Logs related to the [formula](crate::db::formula)
    pub const FORMULA: &str = "formula";

    /// Logs related to [arc constraints](crate::encoder::arcs)
    pub const ARCS: &str = "arcs";

    /// Logs related to [rank registers and boundaries](crate::encoder::position)
    pub const POSITION: &str = "position";

    /// Logs related to [successor constraints](crate::encoder::successor)
    pub const SUCCESSOR: &str = "successor";

    /// Logs related to [witnesses](crate::encoder::witness)
    pub const WITNESS: &str = "witness";

    /// Logs related to [decoding](crate::decoder)
    pub const DECODE: &str = "decode";

    /// Logs related to a [backend](crate::backend)
    pub const BACKEND: &str = "backend";

    /// Logs related to parsing graphs and solutions
    pub const PARSE: &str = "parse";

    /// Logs related to the [context](crate::context)
    pub const CONTEXT: &str = "context";
}
