//! Chain-readiness state machine.
//!
//! Replaces ambient wallet/provider flags with an explicit state value owned
//! by a single logical session and threaded through calls. The machine is
//! re-evaluated whenever the target network changes, resetting rather than
//! merging, so no concurrent-transition conflicts can arise.

use attestdoc_canonical::Network;

/// Readiness of the session with respect to its target network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessState {
    /// No wallet connection has been observed.
    Disconnected,
    /// A wallet is connected to a different network than the target.
    WrongNetwork,
    /// A network switch has been requested and is pending resolution.
    SwitchPending,
    /// The connected network matches the target; registration may proceed.
    Ready,
}

/// Resolution of a pending network switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The wallet switched to the target network.
    Accepted,
    /// The target network is unknown to the wallet; an add-network step was
    /// attempted and the switch stays pending for a retry.
    ChainUnknown,
    /// The user declined the switch.
    Declined,
    /// The switch failed for any other reason.
    Failed,
}

/// Tracks readiness for one session against one target network.
#[derive(Debug, Clone)]
pub struct ReadinessTracker {
    target: Network,
    state: ReadinessState,
}

impl ReadinessTracker {
    /// Creates a tracker in the initial `Disconnected` state.
    pub fn new(target: Network) -> Self {
        Self {
            target,
            state: ReadinessState::Disconnected,
        }
    }

    /// Current state.
    pub fn state(&self) -> ReadinessState {
        self.state
    }

    /// Target network.
    pub fn target(&self) -> Network {
        self.target
    }

    /// Whether registration may proceed.
    pub fn is_ready(&self) -> bool {
        self.state == ReadinessState::Ready
    }

    /// Changes the target network, resetting the machine to `Disconnected`.
    pub fn retarget(&mut self, target: Network) {
        self.target = target;
        self.state = ReadinessState::Disconnected;
    }

    /// Records a wallet connection reporting the given chain id (hex form,
    /// as from `eth_chainId`). Re-evaluates from any state.
    pub fn wallet_connected(&mut self, chain_id_hex: &str) {
        self.state = if chain_id_hex.eq_ignore_ascii_case(self.target.wallet_chain_id()) {
            ReadinessState::Ready
        } else {
            ReadinessState::WrongNetwork
        };
    }

    /// Requests a network switch. Only meaningful from `WrongNetwork`;
    /// ignored elsewhere.
    pub fn switch_requested(&mut self) {
        if self.state == ReadinessState::WrongNetwork {
            self.state = ReadinessState::SwitchPending;
        }
    }

    /// Resolves a pending switch. Ignored outside `SwitchPending`.
    pub fn switch_resolved(&mut self, outcome: SwitchOutcome) {
        if self.state != ReadinessState::SwitchPending {
            return;
        }
        self.state = match outcome {
            SwitchOutcome::Accepted => ReadinessState::Ready,
            // Add-network attempted; the switch is retried while pending.
            SwitchOutcome::ChainUnknown => ReadinessState::SwitchPending,
            SwitchOutcome::Declined | SwitchOutcome::Failed => ReadinessState::WrongNetwork,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disconnected() {
        let tracker = ReadinessTracker::new(Network::Sepolia);
        assert_eq!(tracker.state(), ReadinessState::Disconnected);
        assert!(!tracker.is_ready());
    }

    #[test]
    fn matching_chain_is_ready() {
        let mut tracker = ReadinessTracker::new(Network::Sepolia);
        tracker.wallet_connected("0xaa36a7");
        assert_eq!(tracker.state(), ReadinessState::Ready);
    }

    #[test]
    fn mismatched_chain_is_wrong_network() {
        let mut tracker = ReadinessTracker::new(Network::Sepolia);
        tracker.wallet_connected("0x1");
        assert_eq!(tracker.state(), ReadinessState::WrongNetwork);
    }

    #[test]
    fn chain_id_comparison_ignores_case() {
        let mut tracker = ReadinessTracker::new(Network::Sepolia);
        tracker.wallet_connected("0xAA36A7");
        assert_eq!(tracker.state(), ReadinessState::Ready);
    }

    #[test]
    fn switch_accepted_reaches_ready() {
        let mut tracker = ReadinessTracker::new(Network::Sepolia);
        tracker.wallet_connected("0x1");
        tracker.switch_requested();
        assert_eq!(tracker.state(), ReadinessState::SwitchPending);
        tracker.switch_resolved(SwitchOutcome::Accepted);
        assert_eq!(tracker.state(), ReadinessState::Ready);
    }

    #[test]
    fn unknown_chain_stays_pending_for_retry() {
        let mut tracker = ReadinessTracker::new(Network::Sepolia);
        tracker.wallet_connected("0x1");
        tracker.switch_requested();
        tracker.switch_resolved(SwitchOutcome::ChainUnknown);
        assert_eq!(tracker.state(), ReadinessState::SwitchPending);
        tracker.switch_resolved(SwitchOutcome::Accepted);
        assert_eq!(tracker.state(), ReadinessState::Ready);
    }

    #[test]
    fn declined_switch_returns_to_wrong_network() {
        let mut tracker = ReadinessTracker::new(Network::Sepolia);
        tracker.wallet_connected("0x1");
        tracker.switch_requested();
        tracker.switch_resolved(SwitchOutcome::Declined);
        assert_eq!(tracker.state(), ReadinessState::WrongNetwork);

        tracker.switch_requested();
        tracker.switch_resolved(SwitchOutcome::Failed);
        assert_eq!(tracker.state(), ReadinessState::WrongNetwork);
    }

    #[test]
    fn switch_request_is_ignored_outside_wrong_network() {
        let mut tracker = ReadinessTracker::new(Network::Sepolia);
        tracker.switch_requested();
        assert_eq!(tracker.state(), ReadinessState::Disconnected);

        tracker.wallet_connected("0xaa36a7");
        tracker.switch_requested();
        assert_eq!(tracker.state(), ReadinessState::Ready);
    }

    #[test]
    fn retarget_resets_to_disconnected() {
        let mut tracker = ReadinessTracker::new(Network::Sepolia);
        tracker.wallet_connected("0xaa36a7");
        assert!(tracker.is_ready());
        tracker.retarget(Network::Sepolia);
        assert_eq!(tracker.state(), ReadinessState::Disconnected);
    }
}
