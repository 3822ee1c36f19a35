use std::{env, process, rc::Rc};

use log::{error, info, warn, LevelFilter};
use rand::{seq::SliceRandom, thread_rng};
use simple_logger::SimpleLogger;

use kitchen_planner::{
    constants::{RECIPES_FILE, STORAGE_FILE, WEEKLY_PLAN_SIZE},
    errors::KitchenError,
    kitchen::Kitchen,
    observer::LoggingObserver,
    recipe_reader::read_recipes_from_file,
    storage_reader::read_storage_from_file,
};

fn main() {
    if let Err(err) = SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("Could not start the logger: {}", err);
    }

    let args: Vec<String> = env::args().collect();
    let recipes_path = args.get(1).map(String::as_str).unwrap_or(RECIPES_FILE);
    let storage_path = args.get(2).map(String::as_str).unwrap_or(STORAGE_FILE);

    if let Err(err) = plan_week(recipes_path, storage_path) {
        error!("[MAIN] {}", err);
        process::exit(1);
    }
}

fn plan_week(recipes_path: &str, storage_path: &str) -> Result<(), KitchenError> {
    let recipes = read_recipes_from_file(recipes_path)?;
    let storage = read_storage_from_file(storage_path)?;
    let mut kitchen = Kitchen::new(recipes).with_storage(storage);
    kitchen.register_observer(Rc::new(LoggingObserver));

    let chosen: Vec<_> = kitchen
        .all_recipes()
        .choose_multiple(&mut thread_rng(), WEEKLY_PLAN_SIZE)
        .cloned()
        .collect();
    kitchen.clear_weekly_plan();
    for recipe in chosen {
        kitchen.add_to_weekly_plan(recipe);
    }
    kitchen.finalize_weekly_plan();

    let shopping_list = kitchen.shopping_list();
    if shopping_list.is_empty() {
        info!("[MAIN] Nothing to buy this week");
    } else {
        println!("Shopping list:\n{}", shopping_list);
    }

    let planned = kitchen.weekly_plan().to_vec();
    for recipe in planned {
        match kitchen.cook(&recipe) {
            Ok(()) => {}
            Err(KitchenError::InsufficientIngredients { missing }) => warn!(
                "[MAIN] Cannot cook {}, missing:\n{}",
                recipe.name(),
                missing
            ),
            Err(err) => return Err(err),
        }
    }
    println!("Storage left:\n{}", kitchen.storage());
    Ok(())
}
