use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Course, MenuItem, MenuStats};

/// Running sum and count for one course.
///
/// The sum is exact while it fits in a `Decimal`. Once a price would push it
/// past the representable range the group switches to an incremental mean,
/// which stays within the range of the prices seen.
#[derive(Default)]
struct CourseTotals {
    sum: Decimal,
    count: u32,
    running_mean: Option<Decimal>,
}

impl CourseTotals {
    fn add(&mut self, price: Decimal) {
        self.count += 1;

        if let Some(mean) = self.running_mean {
            self.running_mean = Some(next_mean(mean, price, self.count));
            return;
        }

        match self.sum.checked_add(price) {
            Some(sum) => self.sum = sum,
            None => {
                // The first add always fits, so at least one price is summed
                let mean = self.sum / Decimal::from(self.count - 1);
                debug!(
                    count = self.count,
                    "Course total exceeds decimal range, switching to running mean"
                );
                self.running_mean = Some(next_mean(mean, price, self.count));
            }
        }
    }

    /// Mean price, or zero for an empty course so the panel always renders
    fn average(&self) -> Decimal {
        if let Some(mean) = self.running_mean {
            return mean;
        }

        if self.count == 0 {
            Decimal::ZERO
        } else {
            self.sum / Decimal::from(self.count)
        }
    }
}

/// Fold the `count`-th price into a mean of the previous `count - 1` prices
fn next_mean(mean: Decimal, price: Decimal, count: u32) -> Decimal {
    let n = Decimal::from(count);
    let kept = mean - mean / n;

    kept.checked_add(price / n).unwrap_or(if price.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Derive menu statistics from a snapshot of items.
///
/// Every item counts toward `total_items`; items with `Course::Other` belong
/// to no course group and leave all averages untouched.
pub fn compute_stats(items: &[MenuItem]) -> MenuStats {
    let mut starters = CourseTotals::default();
    let mut mains = CourseTotals::default();
    let mut desserts = CourseTotals::default();

    for item in items {
        match item.course {
            Course::Starter => starters.add(item.price),
            Course::Main => mains.add(item.price),
            Course::Dessert => desserts.add(item.price),
            Course::Other => {}
        }
    }

    let stats = MenuStats {
        total_items: items.len(),
        avg_starters: starters.average(),
        avg_mains: mains.average(),
        avg_desserts: desserts.average(),
    };

    debug!(
        total_items = stats.total_items,
        starters = starters.count,
        mains = mains.count,
        desserts = desserts.count,
        "Computed menu statistics"
    );

    stats
}
