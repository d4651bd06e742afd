#![allow(dead_code)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use menu_rs::models::{Course, MenuItem, NewMenuItem};
use menu_rs::MenuStore;

/// Request with an empty description
pub fn dish(name: &str, course: Course, price: Decimal) -> NewMenuItem {
    NewMenuItem::new(name, "", course, price)
}

/// A small menu covering every course
pub fn sample_menu() -> Vec<NewMenuItem> {
    vec![
        NewMenuItem::new("Samoosas", "Three with chutney", Course::Starter, dec!(40.00)),
        NewMenuItem::new("Chakalaka", "", Course::Starter, dec!(35.00)),
        NewMenuItem::new("Bobotie", "Spiced mince bake", Course::Main, dec!(145.00)),
        NewMenuItem::new("Malva Pudding", "With custard", Course::Dessert, dec!(65.50)),
    ]
}

/// Store pre-filled with the given requests, in order
pub fn store_with(requests: Vec<NewMenuItem>) -> (MenuStore, Vec<MenuItem>) {
    let mut store = MenuStore::new();
    let items = requests
        .into_iter()
        .map(|request| store.add_item(request))
        .collect();
    (store, items)
}

pub fn names(store: &MenuStore) -> Vec<String> {
    store.list_items().into_iter().map(|item| item.name).collect()
}
