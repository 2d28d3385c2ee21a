/// Outcome of a single dispatch-loop step: the two outcomes UM-32 actually
/// has. There is no analogue of a transaction VM's
/// `Return`/`ReturnData`/`Revert` outcomes here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The VM should proceed normally with the next fetch.
    Proceed,
    /// `HALT` was dispatched; simulation is over.
    Halted,
}

impl Step {
    /// `true` if the dispatch loop should fetch another instruction.
    pub const fn should_continue(self) -> bool {
        matches!(self, Step::Proceed)
    }
}
