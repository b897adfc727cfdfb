//! Contract list with stage filter buckets.
//!
//! Filtering, badge rendering, and the bucket counts all derive from the same
//! classification in `store::lifecycle`, recomputed against the current time
//! on every render, so the three can never disagree.

use dioxus::prelude::*;

use store::{current_timestamp, ContractInfo, ContractStage};

use crate::StageBadge;

/// Contracts matching the selected filter bucket at the given time.
fn filter_by_stage(
    contracts: &[ContractInfo],
    filter: Option<ContractStage>,
    now: i64,
) -> Vec<ContractInfo> {
    contracts
        .iter()
        .filter(|c| filter.map_or(true, |stage| c.display_stage(now) == stage))
        .cloned()
        .collect()
}

/// How many contracts fall into the given bucket at the given time.
fn stage_count(contracts: &[ContractInfo], stage: ContractStage, now: i64) -> usize {
    contracts
        .iter()
        .filter(|c| c.display_stage(now) == stage)
        .count()
}

/// Short human text for a contract's expiry, relative to now.
fn expiry_text(expires_at: i64, now: i64) -> String {
    let secs = expires_at - now;
    if secs <= 0 {
        "expired".to_string()
    } else if secs < 86_400 {
        "expires today".to_string()
    } else {
        format!("expires in {} days", secs / 86_400)
    }
}

/// Table of contracts with filter chips, one per display stage.
#[component]
pub fn ContractTable(
    contracts: Vec<ContractInfo>,
    /// Bucket preselected when the table mounts (e.g. from stored preferences).
    #[props(default)]
    initial_filter: Option<ContractStage>,
    on_select: EventHandler<String>,
) -> Element {
    let mut filter = use_signal(|| initial_filter);
    let now = current_timestamp();
    let visible = filter_by_stage(&contracts, filter(), now);
    let is_empty = visible.is_empty();

    rsx! {
        div {
            class: "contract-list",

            div {
                class: "filter-chips",
                button {
                    class: if filter().is_none() { "chip chip-active" } else { "chip" },
                    onclick: move |_| filter.set(None),
                    "All ({contracts.len()})"
                }
                for stage in ContractStage::ALL {
                    button {
                        key: "{stage.slug()}",
                        class: if filter() == Some(stage) { "chip chip-active" } else { "chip" },
                        onclick: move |_| filter.set(Some(stage)),
                        "{stage.label()} ({stage_count(&contracts, stage, now)})"
                    }
                }
            }

            if is_empty {
                p { class: "empty-note", "No contracts in this bucket." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Dataset" }
                            th { "Provider" }
                            th { "Consumer" }
                            th { "Stage" }
                            th { "Expiry" }
                        }
                    }
                    tbody {
                        for contract in visible {
                            tr {
                                key: "{contract.id}",
                                onclick: {
                                    let id = contract.id.clone();
                                    move |_| on_select.call(id.clone())
                                },
                                td { "{contract.title}" }
                                td { "{contract.dataset_name}" }
                                td { "{contract.provider_org}" }
                                td { "{contract.consumer_org}" }
                                td { StageBadge { stage: contract.display_stage(now) } }
                                td { "{expiry_text(contract.expires_at, now)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(id: &str, stage: i16, expires_at: i64) -> ContractInfo {
        ContractInfo {
            id: id.to_string(),
            title: format!("Contract {id}"),
            dataset_id: "d-1".to_string(),
            dataset_name: "Telemetry".to_string(),
            provider_org: "Provider Co".to_string(),
            consumer_org: "Consumer Co".to_string(),
            stage,
            expires_at,
            created_at: 0,
        }
    }

    #[test]
    fn test_buckets_are_disjoint() {
        let now = 1_000_000_000;
        let contracts = vec![contract("c-1", 2, 9_999_999_999)];

        // The approved contract sits in exactly the waiting-for-activation bucket
        assert_eq!(
            filter_by_stage(&contracts, Some(ContractStage::WaitingForActivation), now).len(),
            1
        );
        for stage in [
            ContractStage::WaitingForApproval,
            ContractStage::Activated,
            ContractStage::Expired,
        ] {
            assert!(filter_by_stage(&contracts, Some(stage), now).is_empty());
        }
        // And in the unfiltered view
        assert_eq!(filter_by_stage(&contracts, None, now).len(), 1);
    }

    #[test]
    fn test_stage_counts_cover_all_contracts() {
        let now = 1_000_000_000;
        let contracts = vec![
            contract("c-1", 1, now + 1000),
            contract("c-2", 2, now + 1000),
            contract("c-3", 3, now + 1000),
            contract("c-4", 3, now - 1000),
            contract("c-5", 4, now + 1000),
        ];

        let total: usize = ContractStage::ALL
            .into_iter()
            .map(|stage| stage_count(&contracts, stage, now))
            .sum();
        assert_eq!(total, contracts.len());
        assert_eq!(stage_count(&contracts, ContractStage::Expired, now), 2);
    }

    #[test]
    fn test_expiry_text() {
        let now = 1_000_000_000;
        assert_eq!(expiry_text(now, now), "expired");
        assert_eq!(expiry_text(now + 3600, now), "expires today");
        assert_eq!(expiry_text(now + 3 * 86_400, now), "expires in 3 days");
    }
}
