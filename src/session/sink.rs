use crate::foundation::error::ChoreoResult;
use crate::session::frame::FrameUpdate;

/// Consumer of batched visual-state updates: the host's rendering surface.
///
/// `apply` is called once per emitted update, in tick order, between `begin` and `end`.
pub trait VisualSink {
    /// Called before the first update of a run.
    fn begin(&mut self) -> ChoreoResult<()>;
    /// Make one update visible.
    fn apply(&mut self, update: &FrameUpdate) -> ChoreoResult<()>;
    /// Called after the last update of a run.
    fn end(&mut self) -> ChoreoResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    /// Updates in tick order.
    pub updates: Vec<FrameUpdate>,
    finished: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once `end` has been called for the current run.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Most recent update.
    pub fn last(&self) -> Option<&FrameUpdate> {
        self.updates.last()
    }
}

impl VisualSink for InMemorySink {
    fn begin(&mut self) -> ChoreoResult<()> {
        self.updates.clear();
        self.finished = false;
        Ok(())
    }

    fn apply(&mut self, update: &FrameUpdate) -> ChoreoResult<()> {
        self.updates.push(update.clone());
        Ok(())
    }

    fn end(&mut self) -> ChoreoResult<()> {
        self.finished = true;
        Ok(())
    }
}
