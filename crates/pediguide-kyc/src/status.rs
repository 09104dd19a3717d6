use pediguide_core::models::doctor::KycStatus;

/// Map a provider status string onto ours. Unknown or absent → `Pending`.
pub fn map_status(status: Option<&str>) -> KycStatus {
    match status.map(str::to_ascii_lowercase).as_deref() {
        Some("verified" | "completed" | "approved") => KycStatus::Verified,
        Some("rejected" | "failed") => KycStatus::Rejected,
        _ => KycStatus::Pending,
    }
}
