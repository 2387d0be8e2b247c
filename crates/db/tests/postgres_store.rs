//! PostgreSQL backend tests.
//!
//! Need a live database (`DATABASE_URL`); run with `--ignored`.

use robot_store_core::types::new_doc_id;
use robot_store_db::models::product::ProductInput;
use robot_store_db::repositories::{BasketRepo, CatalogRepo, ProductRepo};
use robot_store_db::store::{Collection, DocumentStore, Filter, PgStore, StoreSession};
use serde_json::{json, Number, Value};
use sqlx::PgPool;

fn input(title: &str, category: &str, character: &str) -> ProductInput {
    ProductInput {
        title: title.into(),
        price: Number::from(10),
        image: Some("a.png".into()),
        image2: None,
        image3: None,
        category_id: 3,
        category: category.into(),
        character_id: 4,
        character: character.into(),
        description: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn migrations_seed_catalog_lookups(pool: PgPool) {
    let store = PgStore::new(pool);
    let mut session = store.session().await.unwrap();

    let categories = CatalogRepo::list_categories(session.as_mut()).await.unwrap();
    assert_eq!(categories.len(), 4);
    let characters = CatalogRepo::list_characters(session.as_mut()).await.unwrap();
    assert_eq!(characters.len(), 5);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn product_lifecycle(pool: PgPool) {
    let store = PgStore::new(pool);
    let mut session = store.session().await.unwrap();

    let id = ProductRepo::create(session.as_mut(), &input("Laser Mug", "Mugs", "Rex"))
        .await
        .unwrap();
    ProductRepo::create(session.as_mut(), &input("Fred Mug", "Mugs", "Fred"))
        .await
        .unwrap();

    let rex_mugs = ProductRepo::list(session.as_mut(), Some("Mugs"), Some("Rex"))
        .await
        .unwrap();
    assert_eq!(rex_mugs.len(), 1);
    assert_eq!(rex_mugs[0].id, id);

    let same = input("Laser Mug", "Mugs", "Rex");
    assert_eq!(ProductRepo::update(session.as_mut(), id, &same).await.unwrap(), 0);
    let changed = input("Laser Mug II", "Mugs", "Rex");
    assert_eq!(ProductRepo::update(session.as_mut(), id, &changed).await.unwrap(), 1);

    assert_eq!(ProductRepo::clear_waste(session.as_mut()).await.unwrap(), 2);
    assert_eq!(ProductRepo::clear_waste(session.as_mut()).await.unwrap(), 0);

    let product = ProductRepo::find_by_id(session.as_mut(), id)
        .await
        .unwrap()
        .remove(0);
    assert_eq!(product.fields["title"], "Laser Mug II");
    assert!(!product.fields.contains_key("category_id"));

    assert_eq!(ProductRepo::delete(session.as_mut(), id).await.unwrap(), 1);
    assert_eq!(ProductRepo::delete(session.as_mut(), id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn basket_lookup_by_owner(pool: PgPool) {
    let store = PgStore::new(pool);
    let mut session = store.session().await.unwrap();
    let user_id = new_doc_id();

    let Value::Object(doc) = json!({"user_id": user_id.to_string(), "items": []}) else {
        unreachable!();
    };
    let inserted = session
        .insert_one(Collection::Baskets, doc)
        .await
        .unwrap();

    let basket = BasketRepo::find_by_user(session.as_mut(), user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(basket.id, inserted);

    let found = session
        .find_one(Collection::Baskets, &Filter::all().eq("user_id", "nobody"))
        .await
        .unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn health_check_passes(pool: PgPool) {
    let store = PgStore::new(pool);
    assert!(store.health_check().await.is_ok());
}
