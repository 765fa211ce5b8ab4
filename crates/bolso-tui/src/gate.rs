//! Navigation gate.
//!
//! Pure function of `(ready, signed_in, current_group)` deciding which screen
//! stack should be visible. No animation or deep-link contract.

/// Which stack the current screen belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenGroup {
    /// Unauthenticated stack (login, register).
    Auth,
    /// Authenticated stack (dashboard).
    App,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Session flag not read yet: render nothing.
    Hold,
    /// Current stack matches the session state.
    Stay,
    /// Redirect to the unauthenticated stack root.
    ToLogin,
    /// Redirect to the authenticated stack root.
    ToDashboard,
}

pub fn decide(ready: bool, signed_in: bool, current: ScreenGroup) -> GateDecision {
    if !ready {
        return GateDecision::Hold;
    }

    match (signed_in, current) {
        (false, ScreenGroup::App) => GateDecision::ToLogin,
        (true, ScreenGroup::Auth) => GateDecision::ToDashboard,
        _ => GateDecision::Stay,
    }
}
