/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
Each value is stored as a [ConfigOption], which records the name of the option as used by the cli and the bounds on the value.

```rust
# use hcp_sat::config::{Config, Strategy};
let mut config = Config::default();
assert_eq!(config.strategy.value, Strategy::RippleCarry);

assert!(config.cycle_limit.set(0).is_err());
assert!(config.cycle_limit.set(6).is_ok());
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod strategy;
pub use strategy::Strategy;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which strategy to use to encode successor constraints.
    pub strategy: ConfigOption<Strategy>,

    /// Whether each edge read from a graph file is expanded to both directions.
    pub undirected: ConfigOption<bool>,

    /// Whether models from a backend are checked against the formula before decoding.
    pub verify_model: ConfigOption<bool>,

    /// The most cycles to find when enumerating.
    pub cycle_limit: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strategy: ConfigOption {
                name: "strategy",
                min: Strategy::MIN,
                max: Strategy::MAX,
                value: Strategy::RippleCarry,
            },

            undirected: ConfigOption {
                name: "undirected",
                min: false,
                max: true,
                value: true,
            },

            verify_model: ConfigOption {
                name: "verify",
                min: false,
                max: true,
                value: true,
            },

            cycle_limit: ConfigOption {
                name: "limit",
                min: 1,
                max: usize::MAX,
                value: 1,
            },
        }
    }
}
