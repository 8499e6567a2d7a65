use restaurant_menu::console::Console;
use restaurant_menu::editor::MenuEditor;
use restaurant_menu::framework::{ActorEntity, FrameworkError, ResourceActor};
use restaurant_menu::lifecycle::MenuSystem;
use restaurant_menu::model::{Dish, DishCreate, DishKind, DishUpdate};
use restaurant_menu::ordering::OrderTaker;
use restaurant_menu::storage::{self, StorageError};
use std::io::Cursor;

/// Full round trip: the editor builds and saves a menu, the order taker loads it and orders.
#[tokio::test]
async fn test_editor_output_feeds_order_taker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");

    let system = MenuSystem::load(&path).await;
    assert!(system.menu_client.menu().await.unwrap().is_empty());

    let script = "1\nTomato\n12.50\nCreamy\n1\nmild\n\
                  1\nSteak\n45\nRare\n2\n\
                  1\nCake\n9.99\nChocolate\n3\n\
                  6\n";
    {
        let console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let mut editor = MenuEditor::new(system.menu_client.clone(), console, path.clone());
        editor.run().await.unwrap();
    }
    system.shutdown().await.unwrap();

    let menu = storage::try_load_menu(&path).await.unwrap();
    assert_eq!(
        menu,
        vec![
            Dish::soup("Tomato", 12.50, "Creamy", "mild").unwrap(),
            Dish::main_dish("Steak", 45.0, "Rare").unwrap(),
            Dish::dessert("Cake", 9.99, "Chocolate").unwrap(),
        ]
    );

    let console = Console::new(Cursor::new("1\n1\n2\n0\n\n".to_string()), Vec::new());
    let mut taker = OrderTaker::new(menu, console);
    taker.run().unwrap();
    assert_eq!(taker.order().total(), 70.00);
}

#[tokio::test]
async fn test_round_trip_preserves_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");
    let menu = vec![
        Dish::dessert("Sernik", 0.0, "Polish cheesecake").unwrap(),
        Dish::soup("Żurek", 18.0, "Sour rye soup, \"traditional\"", "").unwrap(),
        Dish::main_dish("Pierogi", 27.35, "Line one\nline two").unwrap(),
        Dish::soup("Tom yum", 31.9, "Thai", "very hot").unwrap(),
    ];

    storage::save_menu(&path, &menu).await.unwrap();
    let loaded = storage::try_load_menu(&path).await.unwrap();

    assert_eq!(loaded, menu);
    assert_eq!(loaded[1].spiciness(), Some(""));
    assert_eq!(loaded[2].spiciness(), None);
}

#[tokio::test]
async fn test_missing_menu_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    assert!(matches!(
        storage::try_load_menu(&path).await,
        Err(StorageError::Missing(_))
    ));
    let system = MenuSystem::load(&path).await;
    assert!(system.menu_client.menu().await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

/// Real Dish actor exercised through the generic client.
#[tokio::test]
async fn test_dish_actor_keeps_positions_in_order() {
    let (actor, client) = ResourceActor::<Dish>::new(8);
    let handle = tokio::spawn(actor.run());

    for (name, price) in [("A", 1.0), ("B", 2.0), ("C", 3.0)] {
        client
            .create(DishCreate {
                name: name.to_string(),
                price,
                description: String::new(),
                kind: DishKind::Dessert,
            })
            .await
            .unwrap();
    }

    let removed = client.delete(1).await.unwrap();
    assert_eq!(removed.name, "B");
    assert_eq!(client.get(1).await.unwrap().unwrap().name, "C");
    assert!(client.get(2).await.unwrap().is_none());

    let update = DishUpdate {
        name: "C2".to_string(),
        price: 4.0,
        description: "updated".to_string(),
        spiciness: None,
    };
    let updated = client.update(1, update.clone()).await.unwrap();
    assert_eq!(updated, Dish::dessert("C2", 4.0, "updated").unwrap());

    assert!(matches!(
        client.update(5, update).await,
        Err(FrameworkError::OutOfRange { index: 5, len: 2 })
    ));
    assert!(matches!(
        client.delete(2).await,
        Err(FrameworkError::OutOfRange { index: 2, len: 2 })
    ));

    let names: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|dish| dish.name)
        .collect();
    assert_eq!(names, ["A", "C2"]);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_create_does_not_grow_the_store() {
    let (actor, client) = ResourceActor::<Dish>::with_entries(
        8,
        vec![Dish::main_dish("Steak", 45.0, "desc").unwrap()],
    );
    let handle = tokio::spawn(actor.run());

    let params = DishCreate {
        name: "Free lunch".to_string(),
        price: -10.0,
        description: String::new(),
        kind: DishKind::MainDish,
    };
    let expected = Dish::from_create_params(params.clone()).unwrap_err();
    match client.create(params).await {
        Err(FrameworkError::EntityError(e)) => assert_eq!(e.to_string(), expected.to_string()),
        other => panic!("Expected EntityError, got {other:?}"),
    }
    assert_eq!(client.list().await.unwrap().len(), 1);

    drop(client);
    handle.await.unwrap();
}
