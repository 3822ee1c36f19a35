//! End to end scenarios over the kitchen and its ingredient storage

use std::io::Cursor;

use kitchen_planner::container::IngredientContainer;
use kitchen_planner::errors::KitchenError;
use kitchen_planner::ingredients::Ingredients;
use kitchen_planner::kitchen::Kitchen;
use kitchen_planner::recipe::Recipe;
use kitchen_planner::recipe_reader::{read_recipes, read_recipes_from_file};
use kitchen_planner::storage_reader::read_storage_from_file;

fn container(entries: &[(&str, f64)]) -> IngredientContainer {
    let mut container = IngredientContainer::new();
    for (name, amount) in entries {
        container.add(name, *amount).unwrap();
    }
    container
}

fn pancakes() -> Recipe {
    let ingredients = container(&[("egg", 4.0), ("milk", 5.0), ("flour", 3.0), ("salt", 1.0)]);
    Recipe::new("pancakes", "almost_dinner", 4, ingredients).unwrap()
}

#[test]
fn test_repeated_adds_accumulate() {
    let mut storage = IngredientContainer::new();
    storage.add("egg", 4.0).unwrap();
    storage.add("milk", 5.0).unwrap();
    storage.add("milk", 2.5).unwrap();

    assert_eq!(7.5, storage.amount_of("milk"));
    assert_eq!(4.0, storage.amount_of("egg"));
}

#[test]
fn test_cooking_debits_the_storage() {
    let storage = container(&[("egg", 12.0), ("milk", 20.0), ("flour", 2000.0), ("salt", 100.0)]);
    let mut kitchen = Kitchen::new(vec![pancakes()]).with_storage(storage);
    let recipe = kitchen.recipe("pancakes").unwrap();

    assert!(kitchen.can_create(&recipe));
    kitchen.cook(&recipe).unwrap();

    let expected = container(&[("egg", 8.0), ("milk", 15.0), ("flour", 1997.0), ("salt", 99.0)]);
    assert_eq!(&expected, kitchen.storage());
}

#[test]
fn test_missing_ingredients_of_a_doubled_recipe() {
    let storage = container(&[("egg", 3.0), ("milk", 3.0), ("flour", 3.0), ("salt", 3.0)]);
    let doubled = pancakes().create_n_portions(8).unwrap();

    let missing = doubled.ingredients().missing_relative_to(&storage);

    assert_eq!(container(&[("egg", 5.0), ("milk", 7.0), ("flour", 3.0)]), missing);
}

#[test]
fn test_failed_bulk_removal_leaves_storage_untouched() {
    let mut storage = container(&[("egg", 12.0), ("milk", 20.0)]);
    let request = container(&[("egg", 100.0)]);

    let result = storage.remove_all(&request);

    assert!(matches!(
        result,
        Err(KitchenError::InsufficientIngredients { .. })
    ));
    assert_eq!(12.0, storage.amount_of("egg"));
    assert_eq!(20.0, storage.amount_of("milk"));
}

#[test]
fn test_malformed_catalog_lines_are_skipped() {
    let catalog = "name$category$portions$ingredients$amounts\n\
                   pancakes$almost_dinner$4$egg;milk;flour;salt$4;5;3;1\n\
                   broken$line$4\n\
                   waffles$Dessert$many$egg$5\n\
                   toast$breakfast$1$bread$2\n";

    let recipes = read_recipes(Cursor::new(catalog)).unwrap();

    let names: Vec<&str> = recipes.iter().map(|recipe| recipe.name()).collect();
    assert_eq!(vec!["pancakes", "toast"], names);
}

#[test]
fn test_bundled_sample_files_load() {
    let root = env!("CARGO_MANIFEST_DIR");
    let recipes = read_recipes_from_file(format!("{}/recipes.txt", root)).unwrap();
    let storage = read_storage_from_file(format!("{}/storage.json", root)).unwrap();
    let kitchen = Kitchen::new(recipes).with_storage(storage);

    assert_eq!(5, kitchen.all_recipes().len());
    let cookable: Vec<String> = kitchen
        .cookable_recipes()
        .iter()
        .map(|recipe| recipe.name().to_string())
        .collect();
    assert_eq!(vec!["pancakes", "omelette", "bread"], cookable);
}
