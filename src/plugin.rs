/// Dispatch-continuation status returned by per-cycle hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HookResult {
    /// Let the host run the remaining handlers this cycle.
    Continue,
    /// Skip the remaining handlers this cycle.
    Stop,
}

/// A component the host invokes once per main-loop iteration.
///
/// Hooks run to completion on the main-loop thread before the next cycle
/// starts and must not block.
pub trait Plugin {
    fn after_each_cycle(&mut self) -> HookResult {
        HookResult::Continue
    }
}
