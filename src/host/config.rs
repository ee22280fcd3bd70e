//! Host configuration and the load-then-run entry point.

use std::path::PathBuf;
use std::sync::Arc;

use super::behaviour::{AddProbe, LogSink, Scene};
use super::plugin::{default_library_path, PamlPlugin};
use crate::error::PluginResult;

/// What the host loads and how long it runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    /// Path to the plugin library.
    pub library: PathBuf,
    pub a: i32,
    pub b: i32,
    /// Number of update frames after start.
    pub frames: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            library: default_library_path(),
            a: 4,
            b: 5,
            frames: 1,
        }
    }
}

/// Load the plugin named by `config`, then run a scene with one `AddProbe`.
pub fn run_host<S: LogSink + 'static>(config: &HostConfig, sink: S) -> PluginResult<Scene> {
    let plugin = PamlPlugin::load(&config.library)?;
    Ok(run_with(Arc::new(plugin), config, sink))
}

/// Run the scene against an already bound plugin.
pub fn run_with<S: LogSink + 'static>(
    plugin: Arc<PamlPlugin>,
    config: &HostConfig,
    sink: S,
) -> Scene {
    let mut scene = Scene::new();
    scene.add(AddProbe::new(plugin, sink, config.a, config.b));
    scene.run(config.frames);
    tracing::debug!(frames = scene.frame(), "scene finished");
    scene
}
