//! # Lifecycle classification — contract stages and VM provisioning states
//!
//! The backend stores lifecycle state as raw integer codes. This module is the
//! single place those codes are turned into display classifications, so that
//! list filtering, badge rendering, and action-button enablement can never
//! disagree with each other.
//!
//! ## Contract stages
//!
//! A contract row carries a raw `stage` (1 = pending approval, 2 = approved
//! but not yet activated, 3 = activated, 4 = reserved) and an `expires_at`
//! unix timestamp. [`classify_contract`] projects those plus the current time
//! onto a [`ContractStage`]:
//!
//! | Raw stage | Condition | Display stage |
//! |-----------|-----------|---------------|
//! | 1 | — | [`ContractStage::WaitingForApproval`] |
//! | 2 | — | [`ContractStage::WaitingForActivation`] |
//! | 3 | `now < expires_at` | [`ContractStage::Activated`] |
//! | 3 | `now >= expires_at` | [`ContractStage::Expired`] |
//! | anything else | — | [`ContractStage::Expired`] |
//!
//! The branches are evaluated top to bottom, first match wins, and the
//! expiry boundary is inclusive: a contract whose `expires_at` equals `now`
//! is already expired. The function is total — no integer input panics — and
//! pure, so callers recompute it on every render instead of storing the
//! result.
//!
//! ## Provisioning states
//!
//! VM rows carry an independent `provisioning_code`. [`provisioning_status`]
//! maps `{1: Provisioning, 2: Ready, 3: NotProvisioned, 4: ProvisioningFailed}`
//! and falls back to [`ProvisioningStatus::NotProvisioned`] for any other
//! code. Codes above 4 are used elsewhere in the backend's numeric range with
//! different meanings, so the fallback is deliberately conservative.

use serde::{Deserialize, Serialize};

use crate::models::ContractInfo;

/// Display classification of a contract's lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractStage {
    WaitingForApproval,
    WaitingForActivation,
    Activated,
    Expired,
}

impl ContractStage {
    /// Every display stage, in workflow order. Used to build filter buckets.
    pub const ALL: [ContractStage; 4] = [
        ContractStage::WaitingForApproval,
        ContractStage::WaitingForActivation,
        ContractStage::Activated,
        ContractStage::Expired,
    ];

    /// Human-readable label shown in badges and filter chips.
    pub fn label(&self) -> &'static str {
        match self {
            ContractStage::WaitingForApproval => "Waiting for approval",
            ContractStage::WaitingForActivation => "Waiting for activation",
            ContractStage::Activated => "Activated",
            ContractStage::Expired => "Expired",
        }
    }

    /// Stable identifier used in CSS classes and stored preferences.
    pub fn slug(&self) -> &'static str {
        match self {
            ContractStage::WaitingForApproval => "waiting-approval",
            ContractStage::WaitingForActivation => "waiting-activation",
            ContractStage::Activated => "activated",
            ContractStage::Expired => "expired",
        }
    }

    /// Inverse of [`slug`](Self::slug). Unknown slugs return `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        ContractStage::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// Whether the consumer-side "Accept" action applies in this stage.
    pub fn can_accept(&self) -> bool {
        matches!(self, ContractStage::WaitingForApproval)
    }

    /// Whether the provider-side "Activate" action applies in this stage.
    pub fn can_activate(&self) -> bool {
        matches!(self, ContractStage::WaitingForActivation)
    }
}

/// Classify a contract's raw lifecycle fields into a display stage.
///
/// `expires_at` and `now` are unix seconds. See the module docs for the
/// decision table; `expires_at == now` counts as expired.
pub fn classify_contract(raw_stage: i16, expires_at: i64, now: i64) -> ContractStage {
    if raw_stage == 1 {
        ContractStage::WaitingForApproval
    } else if raw_stage == 2 {
        ContractStage::WaitingForActivation
    } else if raw_stage == 3 && now < expires_at {
        ContractStage::Activated
    } else {
        ContractStage::Expired
    }
}

impl ContractInfo {
    /// Display stage of this contract at the given time.
    pub fn display_stage(&self, now: i64) -> ContractStage {
        classify_contract(self.stage, self.expires_at, now)
    }
}

/// Display classification of a VM's provisioning state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProvisioningStatus {
    Provisioning,
    Ready,
    NotProvisioned,
    ProvisioningFailed,
}

impl ProvisioningStatus {
    /// Human-readable label shown in badges.
    pub fn label(&self) -> &'static str {
        match self {
            ProvisioningStatus::Provisioning => "Provisioning",
            ProvisioningStatus::Ready => "Ready",
            ProvisioningStatus::NotProvisioned => "Not provisioned",
            ProvisioningStatus::ProvisioningFailed => "Provisioning failed",
        }
    }

    /// Stable identifier used in CSS classes.
    pub fn slug(&self) -> &'static str {
        match self {
            ProvisioningStatus::Provisioning => "provisioning",
            ProvisioningStatus::Ready => "ready",
            ProvisioningStatus::NotProvisioned => "not-provisioned",
            ProvisioningStatus::ProvisioningFailed => "failed",
        }
    }
}

/// Map a raw provisioning code to its display status.
pub fn provisioning_status(code: i16) -> ProvisioningStatus {
    match code {
        1 => ProvisioningStatus::Provisioning,
        2 => ProvisioningStatus::Ready,
        3 => ProvisioningStatus::NotProvisioned,
        4 => ProvisioningStatus::ProvisioningFailed,
        _ => ProvisioningStatus::NotProvisioned,
    }
}

/// Current unix time in seconds, platform-aware.
pub fn current_timestamp() -> i64 {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i64 = 1_700_000_000;

    #[test]
    fn test_documented_stages() {
        assert_eq!(classify_contract(1, T, 0), ContractStage::WaitingForApproval);
        assert_eq!(classify_contract(2, T, 0), ContractStage::WaitingForActivation);
        assert_eq!(classify_contract(3, T, T - 1), ContractStage::Activated);
        assert_eq!(classify_contract(4, T, 0), ContractStage::Expired);
    }

    #[test]
    fn test_stage_beats_expiry() {
        // Raw stages 1 and 2 classify by stage alone, even past expiry
        assert_eq!(classify_contract(1, T, T + 100), ContractStage::WaitingForApproval);
        assert_eq!(classify_contract(2, T, T + 100), ContractStage::WaitingForActivation);
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        assert_eq!(classify_contract(3, T, T), ContractStage::Expired);
        assert_eq!(classify_contract(3, T, T - 1), ContractStage::Activated);
        assert_eq!(classify_contract(3, T, T + 1), ContractStage::Expired);
    }

    #[test]
    fn test_total_over_unknown_stages() {
        for raw in [-1i16, 0, 4, 5, 99] {
            assert_eq!(classify_contract(raw, T, 0), ContractStage::Expired);
        }
    }

    #[test]
    fn test_deterministic() {
        for raw in [-1i16, 0, 1, 2, 3, 4, 5] {
            let first = classify_contract(raw, T, T - 10);
            for _ in 0..10 {
                assert_eq!(classify_contract(raw, T, T - 10), first);
            }
        }
    }

    #[test]
    fn test_waiting_for_activation_bucket() {
        // An approved contract far from expiry sits in exactly one bucket
        let stage = classify_contract(2, 9_999_999_999, 1_000_000_000);
        assert_eq!(stage, ContractStage::WaitingForActivation);
        let buckets: Vec<_> = ContractStage::ALL
            .into_iter()
            .filter(|s| *s == stage)
            .collect();
        assert_eq!(buckets.len(), 1);
    }

    #[test]
    fn test_action_enablement_follows_stage() {
        assert!(ContractStage::WaitingForApproval.can_accept());
        assert!(!ContractStage::WaitingForApproval.can_activate());
        assert!(ContractStage::WaitingForActivation.can_activate());
        assert!(!ContractStage::WaitingForActivation.can_accept());
        assert!(!ContractStage::Activated.can_accept());
        assert!(!ContractStage::Activated.can_activate());
        assert!(!ContractStage::Expired.can_accept());
        assert!(!ContractStage::Expired.can_activate());
    }

    #[test]
    fn test_provisioning_codes() {
        assert_eq!(provisioning_status(1), ProvisioningStatus::Provisioning);
        assert_eq!(provisioning_status(2), ProvisioningStatus::Ready);
        assert_eq!(provisioning_status(3), ProvisioningStatus::NotProvisioned);
        assert_eq!(provisioning_status(4), ProvisioningStatus::ProvisioningFailed);
    }

    #[test]
    fn test_provisioning_default_on_unknown_code() {
        assert_eq!(provisioning_status(99), provisioning_status(3));
        assert_eq!(provisioning_status(0), ProvisioningStatus::NotProvisioned);
        assert_eq!(provisioning_status(-5), ProvisioningStatus::NotProvisioned);
        assert_eq!(provisioning_status(11), ProvisioningStatus::NotProvisioned);
    }

    #[test]
    fn test_stage_slug_roundtrip() {
        for stage in ContractStage::ALL {
            assert_eq!(ContractStage::from_slug(stage.slug()), Some(stage));
        }
        assert_eq!(ContractStage::from_slug("nope"), None);
    }
}
