//! Start/Update lifecycle driven by the host.

use std::sync::{Arc, Mutex};

use super::plugin::PamlPlugin;

/// An object driven by the host's frame loop.
pub trait Behaviour {
    /// Called once, before the first frame.
    fn start(&mut self) {}

    /// Called once per frame.
    fn update(&mut self, _frame: u64) {}
}

/// Destination for lines produced by behaviours.
pub trait LogSink {
    fn log(&mut self, line: &str);
}

/// Writes each line as an info event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&mut self, line: &str) {
        tracing::info!(target: "paml::host", "{line}");
    }
}

/// Captures lines in memory. Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl LogSink for MemorySink {
    fn log(&mut self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
    }
}

/// Calls `Add(a, b)` on start and logs the sum followed by `a`.
pub struct AddProbe<S> {
    plugin: Arc<PamlPlugin>,
    sink: S,
    a: i32,
    b: i32,
}

impl<S: LogSink> AddProbe<S> {
    pub fn new(plugin: Arc<PamlPlugin>, sink: S, a: i32, b: i32) -> Self {
        Self { plugin, sink, a, b }
    }
}

impl<S: LogSink> Behaviour for AddProbe<S> {
    fn start(&mut self) {
        let sum = self.plugin.add(self.a, self.b);
        self.sink.log(&format!("{sum}a"));
    }
}

/// Owns behaviours and replays the host lifecycle over them.
#[derive(Default)]
pub struct Scene {
    behaviours: Vec<Box<dyn Behaviour>>,
    started: bool,
    frame: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, behaviour: impl Behaviour + 'static) {
        self.behaviours.push(Box::new(behaviour));
    }

    /// Frames run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Start every behaviour on the first call, then run `frames` updates.
    pub fn run(&mut self, frames: u64) {
        if !self.started {
            tracing::debug!(behaviours = self.behaviours.len(), "starting scene");
            for behaviour in &mut self.behaviours {
                behaviour.start();
            }
            self.started = true;
        }

        for _ in 0..frames {
            for behaviour in &mut self.behaviours {
                behaviour.update(self.frame);
            }
            self.frame += 1;
        }
    }
}
