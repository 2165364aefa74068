// Library module for testable functions

pub mod cleaning;

/// Calculate months of housing supply
/// Formula: inventory / (homes_sold / (period_duration / 30))
pub fn months_of_supply(inventory: f64, homes_sold: f64, period_duration: f64) -> Option<f64> {
    let monthly_sales_rate = homes_sold / (period_duration / 30.0);
    let months = inventory / monthly_sales_rate;
    if months.is_finite() {
        Some(months)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_of_supply_calculation() {
        // 100 homes in inventory, 50 sold over a 30-day period = 2 months
        let months = months_of_supply(100.0, 50.0, 30.0);
        assert!(months.is_some());
        let months = months.unwrap();
        assert!((months - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_months_of_supply_quarterly_period() {
        // 90-day period triples the implied monthly window
        let months = months_of_supply(100.0, 50.0, 90.0);
        assert!(months.is_some());
        let months = months.unwrap();
        assert!((months - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_months_of_supply_zero_homes_sold() {
        // No sales means the ratio is unbounded (should return None)
        let months = months_of_supply(100.0, 0.0, 30.0);
        assert!(months.is_none());
    }

    #[test]
    fn test_months_of_supply_zero_inventory_zero_sales() {
        // 0 / 0 is undefined (should return None)
        let months = months_of_supply(0.0, 0.0, 30.0);
        assert!(months.is_none());
    }

    #[test]
    fn test_months_of_supply_zero_inventory() {
        // Empty inventory with real sales is simply zero months
        let months = months_of_supply(0.0, 50.0, 30.0);
        assert!(months.is_some());
        assert!(months.unwrap().abs() < 1e-9);
    }
}
