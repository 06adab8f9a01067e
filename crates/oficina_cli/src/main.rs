//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `oficina_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use oficina_core::{MemoryStore, OrderFilter, WorkshopService};

fn main() {
    println!("oficina_core ping={}", oficina_core::ping());
    println!("oficina_core version={}", oficina_core::core_version());

    let service = WorkshopService::open(MemoryStore::new());
    let summary = service.dashboard_summary();
    println!(
        "oficina_core empty_dashboard clients={} orders={} filtered={}",
        summary.client_count,
        summary.order_count,
        service.find_orders(&OrderFilter::default()).len()
    );
}
