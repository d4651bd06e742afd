use anyhow::Context;
use tracing::{info, warn};

use menu_rs::{
    display::{render_manage_list, render_menu, render_stats_panel},
    init_observability,
    models::MenuEventType,
    Config, Course, DishForm, MenuStore,
};

fn main() -> anyhow::Result<()> {
    // Load configuration first (no logging yet)
    let config = Config::from_environment().context("failed to load configuration")?;

    init_observability(
        &config.observability.service_name,
        &config.observability.log_level,
        config.observability.enable_json_logging,
    )?;

    info!(
        "Service: {} v{}",
        config.observability.service_name, config.observability.service_version
    );

    let currency = config.menu.currency_symbol.clone();
    let policy = config.menu.price_policy();
    let mut store = MenuStore::new().with_event_emitter(config.menu.event_emitter());

    store.subscribe(|event| match event.event_type {
        MenuEventType::ItemAdded => info!(
            item_id = %event.item.id,
            menu_size = event.menu_size,
            "{} has been added to the menu",
            event.item.name
        ),
        MenuEventType::ItemRemoved => info!(
            item_id = %event.item.id,
            menu_size = event.menu_size,
            "{} has been removed from the menu",
            event.item.name
        ),
    });

    println!("{}\n", render_stats_panel(&store.stats(), &currency));
    println!("{}\n", render_menu(&store.list_items(), &currency));

    let submissions = [
        DishForm {
            name: "Chakalaka & Pap".to_string(),
            description: "Spicy relish on a bed of maize porridge".to_string(),
            course: Course::Starter,
            price: "45".to_string(),
        },
        DishForm {
            name: "Bobotie".to_string(),
            description: "Spiced mince baked under a savoury custard".to_string(),
            course: Course::Main,
            price: "145,00".to_string(),
        },
        DishForm {
            name: "Bunny Chow".to_string(),
            description: String::new(),
            course: Course::Main,
            price: "95.50".to_string(),
        },
        DishForm {
            name: "Malva Pudding".to_string(),
            description: "Served warm with custard".to_string(),
            course: Course::Dessert,
            price: "65.5".to_string(),
        },
        DishForm {
            name: "   ".to_string(),
            description: String::new(),
            course: Course::Dessert,
            price: "20".to_string(),
        },
        DishForm {
            name: "Koeksisters".to_string(),
            description: String::new(),
            course: Course::Dessert,
            price: "free".to_string(),
        },
    ];

    for form in &submissions {
        match form.validate(&policy) {
            Ok(request) => {
                store.add_item(request);
            }
            Err(e) => warn!(field = e.field(), error = %e, "Dish rejected"),
        }
    }

    println!("{}\n", render_stats_panel(&store.stats(), &currency));
    println!("{}\n", render_menu(&store.list_items(), &currency));

    if let Some(bunny_chow) = store
        .list_items()
        .into_iter()
        .find(|item| item.name == "Bunny Chow")
    {
        store.remove_item(&bunny_chow.id);
    }

    println!("{}\n", render_manage_list(&store.list_items(), &currency));
    let stats = store.stats();
    println!("{}", render_stats_panel(&stats, &currency));

    let stats_json = serde_json::to_string(&stats)?;
    info!(stats = %stats_json, "Menu session complete");
    Ok(())
}
