//! Order summary projection.

use crate::db::OrderRecord;
use crate::models::OrderSummary;
use tracing::warn;

/// Maps joined order records to one summary each, preserving order.
///
/// Orders without a product specification keep their place in the output
/// with `currency` and `unit_of_measure` left empty.
#[must_use]
pub fn project(records: Vec<OrderRecord>) -> Vec<OrderSummary> {
    records.into_iter().map(summarize).collect()
}

fn summarize(record: OrderRecord) -> OrderSummary {
    if record.currency.is_none() && record.unit_of_measure.is_none() {
        warn!(
            "Order {} has no product specification for {}",
            record.id, record.product_symbol
        );
    }

    OrderSummary {
        id: record.id,
        product_symbol: record.product_symbol,
        price: record.price,
        currency: record.currency,
        quantity: record.quantity,
        unit_of_measure: record.unit_of_measure,
        sub_account: record.sub_account_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(id: i64, currency: Option<&str>, uom: Option<&str>) -> OrderRecord {
        OrderRecord {
            id,
            product_symbol: "ABC".to_string(),
            sub_account_id: 1,
            price: dec!(10.0),
            quantity: 5,
            currency: currency.map(str::to_string),
            unit_of_measure: uom.map(str::to_string),
        }
    }

    #[test]
    fn test_project_maps_fields() {
        let summaries = project(vec![record(1, Some("USD"), Some("barrels"))]);

        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.id, 1);
        assert_eq!(summary.product_symbol, "ABC");
        assert_eq!(summary.price, dec!(10.0));
        assert_eq!(summary.currency.as_deref(), Some("USD"));
        assert_eq!(summary.quantity, 5);
        assert_eq!(summary.unit_of_measure.as_deref(), Some("barrels"));
        assert_eq!(summary.sub_account, 1);
    }

    #[test]
    fn test_project_keeps_orders_without_specification() {
        let summaries = project(vec![
            record(1, Some("GBP"), Some("ounces")),
            record(2, None, None),
            record(3, Some("USD"), None),
        ]);

        let ids: Vec<i64> = summaries.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(summaries[1].currency, None);
        assert_eq!(summaries[2].unit_of_measure, None);
    }

    #[test]
    fn test_project_empty() {
        assert!(project(Vec::new()).is_empty());
    }
}
