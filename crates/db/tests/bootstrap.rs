use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    radd_db::health_check(&pool).await.unwrap();

    // Verify all content and usage tables exist.
    let tables = [
        "roles",
        "users",
        "user_sessions",
        "categories",
        "replies",
        "products",
        "favorites",
        "copy_logs",
    ];

    for table in tables {
        let result: Result<(i64,), _> = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await;
        assert!(result.is_ok(), "{table} should exist and be queryable");
    }
}

/// The roles table carries the well-known seed rows.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_roles_seeded(pool: PgPool) {
    let roles: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM roles ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();

    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0], (1, "admin".to_string()));
    assert_eq!(roles[1], (2, "user".to_string()));
}
