//! Host side of the plugin boundary.
//!
//! Loads `PAMLDLL` dynamically, binds its entry points by symbol name, and
//! drives behaviours through a Start/Update lifecycle.

pub mod behaviour;
pub mod config;
pub mod plugin;

pub use behaviour::{AddProbe, Behaviour, LogSink, MemorySink, Scene, TracingSink};
pub use config::{run_host, run_with, HostConfig};
pub use plugin::{default_library_path, AddFn, NativeLibrary, PamlPlugin, ADD_SYMBOL, LIBRARY_NAME};
