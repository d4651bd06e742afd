use rust_decimal::{Decimal, RoundingStrategy};

use super::course_style;
use crate::models::{MenuItem, MenuStats};

/// Format an amount with two decimals after the currency symbol, e.g. `R 12.50`
pub fn format_price(price: Decimal, currency_symbol: &str) -> String {
    format!("{} {}", currency_symbol, two_places(price))
}

fn two_places(price: Decimal) -> Decimal {
    let mut rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Card for the home screen list
pub fn render_menu_card(item: &MenuItem, currency_symbol: &str) -> String {
    let style = course_style(&item.course);
    let mut lines = vec![format!(
        "{} {} | {}",
        item.name,
        style.emoji,
        format_price(item.price, currency_symbol)
    )];

    if item.has_description() {
        lines.push(format!("  {}", item.description));
    }

    lines.push(format!("  [{}]", item.course.as_str().to_uppercase()));
    lines.join("\n")
}

/// Home screen list of cards, or the empty-state message
pub fn render_menu(items: &[MenuItem], currency_symbol: &str) -> String {
    if items.is_empty() {
        return "No menu items yet!\nTap \"Manage Menu\" to add some dishes".to_string();
    }

    items
        .iter()
        .map(|item| render_menu_card(item, currency_symbol))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Numbered list shown on the manage-menu screen
pub fn render_manage_list(items: &[MenuItem], currency_symbol: &str) -> String {
    let mut lines = vec![format!("Current Menu Items ({})", items.len())];

    if items.is_empty() {
        lines.push("Your menu is empty".to_string());
        lines.push("Add some dishes above to get started!".to_string());
        return lines.join("\n");
    }

    for (index, item) in items.iter().enumerate() {
        lines.push(format!(
            "{}. {} - {}{}",
            index + 1,
            item.name,
            currency_symbol,
            two_places(item.price)
        ));
        if item.has_description() {
            lines.push(format!("   {}", item.description));
        }
        lines.push(format!("   {}", course_style(&item.course).label));
    }

    lines.join("\n")
}

/// Statistics panel with the per-course averages
pub fn render_stats_panel(stats: &MenuStats, currency_symbol: &str) -> String {
    [
        "Menu Statistics".to_string(),
        format!("Total Items: {}", stats.total_items),
        format!(
            "Starters Avg: {}",
            format_price(stats.avg_starters, currency_symbol)
        ),
        format!("Mains Avg: {}", format_price(stats.avg_mains, currency_symbol)),
        format!(
            "Desserts Avg: {}",
            format_price(stats.avg_desserts, currency_symbol)
        ),
    ]
    .join("\n")
}
