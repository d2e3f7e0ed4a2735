//! Dashboard aggregates over the asset collection

use crate::constants::{MONTH_LABELS, TOP_MANUFACTURERS};
use crate::db::Asset;
use chrono::Datelike;

/// Totals shown on the dashboard cards
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStats {
    pub total_assets: usize,
    pub total_invested: f64,
    pub total_dispose_value: f64,
    pub average_depreciation: f64,
}

impl DashboardStats {
    pub fn compute(assets: &[Asset]) -> Self {
        let total_invested = assets.iter().map(|a| a.purchase_price).sum();
        let total_dispose_value = assets.iter().map(|a| a.dispose_value).sum();
        let total_depreciation: f64 = assets.iter().map(|a| a.depreciation).sum();
        let average_depreciation = if assets.is_empty() {
            0.0
        } else {
            total_depreciation / assets.len() as f64
        };

        Self {
            total_assets: assets.len(),
            total_invested,
            total_dispose_value,
            average_depreciation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTotal {
    pub month: &'static str,
    pub total: f64,
}

/// Purchase price summed per calendar month, Jan..Dec. Assets without a
/// purchase date are left out.
pub fn monthly_purchase_totals(assets: &[Asset]) -> [MonthlyTotal; 12] {
    let mut totals = [0.0_f64; 12];
    for asset in assets {
        if let Some(date) = asset.purchase_date {
            totals[date.month0() as usize] += asset.purchase_price;
        }
    }

    std::array::from_fn(|i| MonthlyTotal {
        month: MONTH_LABELS[i],
        total: totals[i],
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManufacturerShare {
    pub name: String,
    pub count: usize,
}

/// Asset count per manufacturer, largest first. Ties keep first-seen order.
/// Anything past the top entries is folded into a trailing "Others" share.
pub fn manufacturer_breakdown(assets: &[Asset]) -> Vec<ManufacturerShare> {
    let mut shares: Vec<ManufacturerShare> = Vec::new();
    for asset in assets {
        let name = asset.manufacturer.trim();
        if name.is_empty() {
            continue;
        }
        match shares.iter_mut().find(|s| s.name == name) {
            Some(share) => share.count += 1,
            None => shares.push(ManufacturerShare {
                name: name.to_string(),
                count: 1,
            }),
        }
    }

    // stable sort keeps first-seen order among equal counts
    shares.sort_by(|a, b| b.count.cmp(&a.count));

    if shares.len() > TOP_MANUFACTURERS {
        let others: usize = shares[TOP_MANUFACTURERS..].iter().map(|s| s.count).sum();
        shares.truncate(TOP_MANUFACTURERS);
        shares.push(ManufacturerShare {
            name: "Others".to_string(),
            count: others,
        });
    }

    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn asset(manufacturer: &str, price: f64, depreciation: f64, date: Option<(i32, u32)>) -> Asset {
        Asset {
            id: format!("{manufacturer}-{price}"),
            title: "Item".to_string(),
            manufacturer: manufacturer.to_string(),
            color: "White".to_string(),
            serial_number: "SN".to_string(),
            purchase_date: date.and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1)),
            purchase_price: price,
            depreciation,
            dispose_value: price / 10.0,
            assigned_to: "Sipho".to_string(),
        }
    }

    #[test]
    fn empty_collection_has_zero_stats() {
        let stats = DashboardStats::compute(&[]);
        assert_eq!(stats, DashboardStats::default());
        assert!(monthly_purchase_totals(&[]).iter().all(|m| m.total == 0.0));
        assert!(manufacturer_breakdown(&[]).is_empty());
    }

    #[test]
    fn totals_and_average() {
        let assets = vec![
            asset("Dell", 1000.0, 10.0, None),
            asset("HP", 3000.0, 40.0, None),
        ];
        let stats = DashboardStats::compute(&assets);

        assert_eq!(stats.total_assets, 2);
        assert_eq!(stats.total_invested, 4000.0);
        assert_eq!(stats.total_dispose_value, 400.0);
        assert_eq!(stats.average_depreciation, 25.0);
    }

    #[test]
    fn monthly_totals_bucket_by_month_and_skip_undated() {
        let assets = vec![
            asset("Dell", 100.0, 0.0, Some((2023, 1))),
            asset("Dell", 250.0, 0.0, Some((2024, 1))),
            asset("HP", 75.0, 0.0, Some((2024, 12))),
            asset("HP", 999.0, 0.0, None),
        ];
        let months = monthly_purchase_totals(&assets);

        assert_eq!(months[0], MonthlyTotal { month: "Jan", total: 350.0 });
        assert_eq!(months[11], MonthlyTotal { month: "Dec", total: 75.0 });
        assert_eq!(months.iter().map(|m| m.total).sum::<f64>(), 425.0);
    }

    #[test]
    fn breakdown_sorts_by_count_and_keeps_first_seen_ties() {
        let assets = vec![
            asset("Lenovo", 1.0, 0.0, None),
            asset("Apple", 2.0, 0.0, None),
            asset("Apple", 3.0, 0.0, None),
            asset("Dell", 4.0, 0.0, None),
            asset("", 5.0, 0.0, None),
        ];
        let names: Vec<(String, usize)> = manufacturer_breakdown(&assets)
            .into_iter()
            .map(|s| (s.name, s.count))
            .collect();

        assert_eq!(
            names,
            vec![
                ("Apple".to_string(), 2),
                ("Lenovo".to_string(), 1),
                ("Dell".to_string(), 1),
            ]
        );
    }

    #[test]
    fn breakdown_folds_the_tail_into_others() {
        let makers = ["A", "B", "C", "D", "E", "F", "G", "H", "I"];
        let mut assets: Vec<Asset> = makers
            .iter()
            .enumerate()
            .map(|(i, m)| asset(m, i as f64, 0.0, None))
            .collect();
        assets.push(asset("A", 100.0, 0.0, None));

        let shares = manufacturer_breakdown(&assets);
        assert_eq!(shares.len(), TOP_MANUFACTURERS + 1);
        assert_eq!(shares[0], ManufacturerShare { name: "A".into(), count: 2 });
        assert_eq!(shares.last(), Some(&ManufacturerShare { name: "Others".into(), count: 2 }));
    }
}
