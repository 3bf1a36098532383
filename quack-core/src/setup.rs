use std::fmt::Debug;

type Step<E> = Box<dyn FnOnce() -> Result<(), E>>;

/// Ordered list of page setup steps, run once by a single initializer.
pub struct SetupQueue<E> {
    steps: Vec<(&'static str, Step<E>)>,
}

impl<E: Debug> Default for SetupQueue<E> {
    fn default() -> Self {
        SetupQueue { steps: Vec::new() }
    }
}

impl<E: Debug> SetupQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F>(&mut self, name: &'static str, step: F) -> &mut Self
    where
        F: FnOnce() -> Result<(), E> + 'static,
    {
        self.steps.push((name, Box::new(step)));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in registration order. A failing step is logged and
    /// later steps still run. Returns the names of the steps that failed.
    pub fn run(self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        for (name, step) in self.steps {
            log::debug!("setup: {}", name);
            if let Err(e) = step() {
                log::error!("setup step {} failed: {:?}", name, e);
                failed.push(name);
            }
        }
        failed
    }
}
