// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount-scoped liveness guard for fire-and-forget hydration tasks.

/// Tracks whether a panel's mount is still live.
///
/// A panel hydrates its initial tree with a fire-and-forget task. When the
/// task completes, the panel may already have been unmounted (or unmounted
/// and remounted), and writing the result into a destroyed `BrowserState`
/// must not happen. The lifetime hands out [`HydrationTicket`]s stamped with
/// the current mount epoch; completed tasks present their ticket to
/// [`MountLifetime::admit`] and drop their result when it is refused.
///
/// ```rust
/// use curio_panel::MountLifetime;
///
/// let mut mount = MountLifetime::new();
/// let ticket = mount.ticket();
/// assert!(mount.admit(&ticket));
///
/// mount.unmount();
/// assert!(!mount.admit(&ticket)); // stale: result must be discarded
///
/// mount.remount();
/// assert!(!mount.admit(&ticket)); // tickets do not survive a remount
/// assert!(mount.admit(&mount.ticket()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountLifetime {
    epoch: u64,
    mounted: bool,
}

/// Proof that a task was started during a particular mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HydrationTicket {
    epoch: u64,
}

impl MountLifetime {
    /// A freshly mounted lifetime.
    pub fn new() -> Self {
        Self {
            epoch: 0,
            mounted: true,
        }
    }

    /// Issue a ticket bound to the current mount epoch.
    pub fn ticket(&self) -> HydrationTicket {
        HydrationTicket { epoch: self.epoch }
    }

    /// Mark the panel unmounted; all outstanding tickets become stale.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Mount again under a new epoch. Tickets from earlier mounts stay stale.
    pub fn remount(&mut self) {
        self.epoch += 1;
        self.mounted = true;
    }

    /// Is the panel currently mounted?
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// May a task holding this ticket still apply its result?
    pub fn admit(&self, ticket: &HydrationTicket) -> bool {
        self.mounted && ticket.epoch == self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ticket_is_admitted() {
        let mount = MountLifetime::new();
        assert!(mount.admit(&mount.ticket()));
    }

    #[test]
    fn unmount_refuses_outstanding_tickets() {
        let mut mount = MountLifetime::new();
        let ticket = mount.ticket();
        mount.unmount();
        assert!(!mount.is_mounted());
        assert!(!mount.admit(&ticket));
    }

    #[test]
    fn remount_invalidates_earlier_epochs() {
        let mut mount = MountLifetime::new();
        let old = mount.ticket();
        mount.unmount();
        mount.remount();
        assert!(!mount.admit(&old));
        assert!(mount.admit(&mount.ticket()));
    }
}
