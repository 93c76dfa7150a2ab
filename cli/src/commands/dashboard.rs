// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Dashboard command: headline insights plus revenue by date.

use anyhow::Result;
use colored::Colorize;

use storefront_admin_core::domain::insight::format_money;
use storefront_admin_core::{AdminError, AdminServices, OrderAnalytics};

pub async fn handle_command(services: &AdminServices) -> Result<()> {
    match services.dashboard().load().await {
        Ok(analytics) => {
            print!("{}", render(&analytics));
            Ok(())
        }
        Err(AdminError::MissingField(field)) => {
            println!(
                "{}",
                format!("⚠ Order data has no '{}' column; insights unavailable", field).yellow()
            );
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to load dashboard: {}", e)),
    }
}

pub fn render(analytics: &OrderAnalytics) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Business Insights".bold()));
    for insight in analytics.insights.entries() {
        out.push_str(&format!("  {:<22} {}\n", insight.label, insight.formatted));
    }

    if analytics.filtered_records > 0 {
        out.push_str(&format!(
            "  {}\n",
            format!(
                "{} of {} orders skipped (invalid price or date)",
                analytics.filtered_records, analytics.raw_order_count
            )
            .dimmed()
        ));
    }

    out.push('\n');
    out.push_str(&format!("{}\n", "Revenue Over Time".bold()));
    if analytics.revenue_by_date.is_empty() {
        out.push_str(&format!("  {}\n", "No revenue recorded".dimmed()));
    }
    for point in &analytics.revenue_by_date {
        out.push_str(&format!(
            "  {}  {}\n",
            point.date.format("%Y-%m-%d"),
            format_money(point.revenue, &analytics.insights.currency_symbol)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_admin_core::{Order, OrderAnalyticsAggregator};

    #[test]
    fn renders_insights_in_display_order() {
        colored::control::set_override(false);

        let orders: Vec<Order> = serde_json::from_str(
            r#"[
                {"customer_id": 1, "total_price": "1200.50", "order_date": "2024-05-02"},
                {"customer_id": 2, "total_price": "x", "order_date": "2024-05-03"}
            ]"#,
        )
        .unwrap();
        let analytics = OrderAnalyticsAggregator::default().aggregate(&orders, 3).unwrap();

        let text = render(&analytics);
        let revenue = text.find("Total Revenue").unwrap();
        let customers = text.find("Total Customers").unwrap();
        assert!(revenue < customers);
        assert!(text.contains("$1,200.50"));
        assert!(text.contains("1 of 2 orders skipped"));
        assert!(text.contains("2024-05-02  $1,200.50"));
    }
}
