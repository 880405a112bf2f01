//! Integration tests for the bilingual entity repositories.
//!
//! Exercises the full repository layer against a real database:
//! - Category / reply / product CRUD
//! - Bilingual validation (at least one populated side)
//! - Ownership gate on update and delete
//! - Reply visibility filtering and search

use assert_matches::assert_matches;
use sqlx::PgPool;

use radd_core::error::CoreError;
use radd_core::roles::{ROLE_ADMIN, ROLE_USER};
use radd_db::error::DbError;
use radd_db::models::category::{CreateCategory, UpdateCategory};
use radd_db::models::product::{CreateProduct, UpdateProduct};
use radd_db::models::reply::{CreateReply, ReplyListParams, UpdateReply};
use radd_db::models::user::CreateUser;
use radd_db::repositories::{CategoryRepo, ProductRepo, ReplyRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a user directly; the password hash is opaque to this layer.
async fn create_user(pool: &PgPool, username: &str, role_id: i64) -> i64 {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: "not-a-real-hash".to_string(),
        role_id,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
        .id
}

fn new_category(name_en: &str, name_ar: &str) -> CreateCategory {
    CreateCategory {
        name_en: name_en.to_string(),
        name_ar: name_ar.to_string(),
        description_en: None,
        description_ar: None,
    }
}

fn new_reply(title_en: &str, title_ar: &str, category_id: i64) -> CreateReply {
    CreateReply {
        title_en: title_en.to_string(),
        title_ar: title_ar.to_string(),
        content_en: format!("{title_en} content"),
        content_ar: String::new(),
        category_id,
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_crud(pool: PgPool) {
    let owner = create_user(&pool, "cat_owner", 2).await;

    let category = CategoryRepo::create(&pool, owner, &new_category("Greetings", "تحيات"))
        .await
        .unwrap();
    assert_eq!(category.name_en, "Greetings");
    assert_eq!(category.created_by, owner);

    let found = CategoryRepo::find_by_id(&pool, category.id).await.unwrap();
    assert!(found.is_some());

    let update = UpdateCategory {
        name_en: Some("Welcomes".to_string()),
        name_ar: None,
        description_en: Some("Standard welcome messages".to_string()),
        description_ar: None,
    };
    let updated = CategoryRepo::update(&pool, category.id, owner, ROLE_USER, &update)
        .await
        .unwrap();
    assert_eq!(updated.name_en, "Welcomes");
    // Untouched fields survive a partial update.
    assert_eq!(updated.name_ar, "تحيات");

    CategoryRepo::delete(&pool, category.id, owner, ROLE_USER)
        .await
        .unwrap();
    assert!(CategoryRepo::find_by_id(&pool, category.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_requires_one_language(pool: PgPool) {
    let owner = create_user(&pool, "blank_cat", 2).await;

    // Both sides blank: rejected.
    let err = CategoryRepo::create(&pool, owner, &new_category("", "  "))
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));

    // One side populated: accepted.
    let category = CategoryRepo::create(&pool, owner, &new_category("", "تحيات"))
        .await
        .unwrap();
    assert_eq!(category.name_en, "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_delete_cascades_replies(pool: PgPool) {
    let owner = create_user(&pool, "cascade_owner", 2).await;
    let category = CategoryRepo::create(&pool, owner, &new_category("Doomed", ""))
        .await
        .unwrap();
    let reply = ReplyRepo::create(&pool, owner, &new_reply("Hello", "", category.id))
        .await
        .unwrap();

    CategoryRepo::delete(&pool, category.id, owner, ROLE_USER)
        .await
        .unwrap();

    assert!(ReplyRepo::find_by_id(&pool, reply.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Ownership gate
// ---------------------------------------------------------------------------

/// Delete by neither-owner-nor-admin fails Forbidden and the row survives.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_owner_delete_is_forbidden_and_row_survives(pool: PgPool) {
    let owner = create_user(&pool, "gate_owner", 2).await;
    let stranger = create_user(&pool, "gate_stranger", 2).await;

    let category = CategoryRepo::create(&pool, owner, &new_category("Mine", ""))
        .await
        .unwrap();
    let reply = ReplyRepo::create(&pool, owner, &new_reply("Mine too", "", category.id))
        .await
        .unwrap();

    let err = ReplyRepo::delete(&pool, reply.id, stranger, ROLE_USER)
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Forbidden(_)));

    // The row must be untouched.
    assert!(ReplyRepo::find_by_id(&pool, reply.id)
        .await
        .unwrap()
        .is_some());

    let err = CategoryRepo::update(
        &pool,
        category.id,
        stranger,
        ROLE_USER,
        &UpdateCategory {
            name_en: Some("Stolen".to_string()),
            name_ar: None,
            description_en: None,
            description_ar: None,
        },
    )
    .await
    .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Forbidden(_)));
}

/// Admins pass the gate for rows they do not own.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_may_mutate_foreign_rows(pool: PgPool) {
    let owner = create_user(&pool, "adm_owner", 2).await;
    let admin = create_user(&pool, "adm_admin", 1).await;

    let category = CategoryRepo::create(&pool, owner, &new_category("Shared", ""))
        .await
        .unwrap();
    let reply = ReplyRepo::create(&pool, owner, &new_reply("Shared reply", "", category.id))
        .await
        .unwrap();

    ReplyRepo::delete(&pool, reply.id, admin, ROLE_ADMIN)
        .await
        .unwrap();
    CategoryRepo::delete(&pool, category.id, admin, ROLE_ADMIN)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Replies
// ---------------------------------------------------------------------------

/// Creation assigns ownership server-side and defaults to globally active.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reply_create_assigns_owner(pool: PgPool) {
    let owner = create_user(&pool, "reply_owner", 2).await;
    let category = CategoryRepo::create(&pool, owner, &new_category("General", ""))
        .await
        .unwrap();

    // Arabic title blank is fine; the English side carries the field.
    let reply = ReplyRepo::create(&pool, owner, &new_reply("Thanks", "", category.id))
        .await
        .unwrap();
    assert_eq!(reply.created_by, owner);
    assert!(reply.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reply_create_missing_category(pool: PgPool) {
    let owner = create_user(&pool, "no_cat", 2).await;

    let err = ReplyRepo::create(&pool, owner, &new_reply("Orphan", "", 9999))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        DbError::Core(CoreError::NotFound {
            entity: "Category",
            ..
        })
    );
}

/// A user sees their own replies plus active ones, but not other users'
/// inactive replies.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reply_visibility_filter(pool: PgPool) {
    let alice = create_user(&pool, "vis_alice", 2).await;
    let bob = create_user(&pool, "vis_bob", 2).await;
    let category = CategoryRepo::create(&pool, alice, &new_category("Visibility", ""))
        .await
        .unwrap();

    let own = ReplyRepo::create(&pool, alice, &new_reply("Alice own", "", category.id))
        .await
        .unwrap();
    ReplyRepo::set_active(&pool, own.id, false).await.unwrap();

    let active = ReplyRepo::create(&pool, bob, &new_reply("Bob active", "", category.id))
        .await
        .unwrap();

    let hidden = ReplyRepo::create(&pool, bob, &new_reply("Bob hidden", "", category.id))
        .await
        .unwrap();
    ReplyRepo::set_active(&pool, hidden.id, false).await.unwrap();

    let visible = ReplyRepo::list_visible(&pool, alice, &ReplyListParams::default())
        .await
        .unwrap();
    let ids: Vec<i64> = visible.iter().map(|r| r.id).collect();

    assert!(ids.contains(&own.id), "own inactive reply must be visible");
    assert!(ids.contains(&active.id), "active reply must be visible");
    assert!(!ids.contains(&hidden.id), "foreign inactive reply must be hidden");

    // The admin listing ignores visibility.
    let all = ReplyRepo::list_all(&pool, &ReplyListParams::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reply_search_spans_both_languages(pool: PgPool) {
    let owner = create_user(&pool, "searcher", 2).await;
    let category = CategoryRepo::create(&pool, owner, &new_category("Search", ""))
        .await
        .unwrap();

    ReplyRepo::create(&pool, owner, &new_reply("Shipping delay", "", category.id))
        .await
        .unwrap();
    ReplyRepo::create(&pool, owner, &new_reply("", "تأخير الشحن", category.id))
        .await
        .unwrap();
    ReplyRepo::create(&pool, owner, &new_reply("Refund policy", "", category.id))
        .await
        .unwrap();

    let params = ReplyListParams {
        search: Some("shipping".to_string()),
        ..Default::default()
    };
    let hits = ReplyRepo::list_visible(&pool, owner, &params).await.unwrap();
    assert_eq!(hits.len(), 1);

    let params = ReplyListParams {
        search: Some("الشحن".to_string()),
        ..Default::default()
    };
    let hits = ReplyRepo::list_visible(&pool, owner, &params).await.unwrap();
    assert_eq!(hits.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reply_update_partial(pool: PgPool) {
    let owner = create_user(&pool, "upd_owner", 2).await;
    let category = CategoryRepo::create(&pool, owner, &new_category("Updates", ""))
        .await
        .unwrap();
    let reply = ReplyRepo::create(&pool, owner, &new_reply("Before", "قبل", category.id))
        .await
        .unwrap();

    let update = UpdateReply {
        title_en: Some("After".to_string()),
        title_ar: None,
        content_en: None,
        content_ar: None,
        category_id: None,
    };
    let updated = ReplyRepo::update(&pool, reply.id, owner, ROLE_USER, &update)
        .await
        .unwrap();
    assert_eq!(updated.title_en, "After");
    assert_eq!(updated.title_ar, "قبل");
    assert_eq!(updated.content_en, reply.content_en);
}

// ---------------------------------------------------------------------------
// Products (admin-only mutations)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_mutations_are_admin_only(pool: PgPool) {
    let admin = create_user(&pool, "prod_admin", 1).await;
    let user = create_user(&pool, "prod_user", 2).await;

    let input = CreateProduct {
        name_en: "Widget".to_string(),
        name_ar: "أداة".to_string(),
        description_en: None,
        description_ar: None,
    };

    let err = ProductRepo::create(&pool, user, ROLE_USER, &input)
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Forbidden(_)));

    let product = ProductRepo::create(&pool, admin, ROLE_ADMIN, &input)
        .await
        .unwrap();
    assert!(product.is_active);

    let update = UpdateProduct {
        name_en: None,
        name_ar: None,
        description_en: None,
        description_ar: None,
        is_active: Some(false),
    };
    let err = ProductRepo::update(&pool, product.id, ROLE_USER, &update)
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Forbidden(_)));

    let updated = ProductRepo::update(&pool, product.id, ROLE_ADMIN, &update)
        .await
        .unwrap();
    assert!(!updated.is_active);

    // Inactive products drop out of the public listing.
    let public = ProductRepo::list(&pool, false).await.unwrap();
    assert!(public.is_empty());
    let all = ProductRepo::list(&pool, true).await.unwrap();
    assert_eq!(all.len(), 1);

    ProductRepo::delete(&pool, product.id, ROLE_ADMIN)
        .await
        .unwrap();
    assert!(ProductRepo::find_by_id(&pool, product.id)
        .await
        .unwrap()
        .is_none());
}
