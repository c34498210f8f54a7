//! Integration tests for the prospect repository.
//!
//! Exercises create defaults, filter predicates, partial-update merge
//! semantics (absent vs explicit null), timestamp behaviour, and delete
//! outcomes against a real database.

use sqlx::PgPool;

use leadflow_core::patch::Patch;
use leadflow_db::models::prospect::{
    CreateProspect, ProspectFilter, ProspectPriority, ProspectStatus, UpdateProspect,
};
use leadflow_db::repositories::ProspectRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_prospect(first: &str, last: &str, email: &str) -> CreateProspect {
    CreateProspect {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone: None,
        company: None,
        position: None,
        status: None,
        priority: None,
        estimated_value: None,
        notes: None,
    }
}

fn filter() -> ProspectFilter {
    ProspectFilter::default()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_applies_schema_defaults(pool: PgPool) {
    let created = ProspectRepo::create(&pool, &new_prospect("John", "Doe", "john@x.com"))
        .await
        .unwrap();

    assert_eq!(created.status, ProspectStatus::New);
    assert_eq!(created.priority, ProspectPriority::Medium);
    assert_eq!(created.phone, None);
    assert_eq!(created.created_at, created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_honours_explicit_enums(pool: PgPool) {
    let mut input = new_prospect("Jane", "Roe", "jane@x.com");
    input.status = Some(ProspectStatus::Qualified);
    input.priority = Some(ProspectPriority::Urgent);
    input.estimated_value = Some(50_000.0);

    let created = ProspectRepo::create(&pool, &input).await.unwrap();

    assert_eq!(created.status, ProspectStatus::Qualified);
    assert_eq!(created.priority, ProspectPriority::Urgent);
    assert_eq!(created.estimated_value, Some(50_000.0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_assigns_unique_ids(pool: PgPool) {
    let a = ProspectRepo::create(&pool, &new_prospect("A", "One", "a@x.com"))
        .await
        .unwrap();
    let b = ProspectRepo::create(&pool, &new_prospect("B", "Two", "b@x.com"))
        .await
        .unwrap();

    assert_ne!(a.id, b.id);
}

// ---------------------------------------------------------------------------
// Read by filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_filter_returns_all_newest_first(pool: PgPool) {
    let a = ProspectRepo::create(&pool, &new_prospect("A", "One", "a@x.com"))
        .await
        .unwrap();
    let b = ProspectRepo::create(&pool, &new_prospect("B", "Two", "b@x.com"))
        .await
        .unwrap();

    let all = ProspectRepo::list(&pool, &filter()).await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, b.id);
    assert_eq!(all[1].id, a.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_filter_returns_exact_subset(pool: PgPool) {
    let mut won = new_prospect("Winnie", "Won", "won@x.com");
    won.status = Some(ProspectStatus::ClosedWon);
    ProspectRepo::create(&pool, &won).await.unwrap();
    ProspectRepo::create(&pool, &new_prospect("Newt", "New", "new@x.com"))
        .await
        .unwrap();

    let results = ProspectRepo::list(
        &pool,
        &ProspectFilter {
            status: Some(ProspectStatus::ClosedWon),
            ..filter()
        },
    )
    .await
    .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].email, "won@x.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn combined_filters_intersect(pool: PgPool) {
    let mut a = new_prospect("A", "One", "a@x.com");
    a.status = Some(ProspectStatus::Contacted);
    a.priority = Some(ProspectPriority::High);
    ProspectRepo::create(&pool, &a).await.unwrap();

    let mut b = new_prospect("B", "Two", "b@x.com");
    b.status = Some(ProspectStatus::Contacted);
    b.priority = Some(ProspectPriority::Low);
    ProspectRepo::create(&pool, &b).await.unwrap();

    let results = ProspectRepo::list(
        &pool,
        &ProspectFilter {
            status: Some(ProspectStatus::Contacted),
            priority: Some(ProspectPriority::High),
            ..filter()
        },
    )
    .await
    .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].email, "a@x.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_insensitive_across_fields(pool: PgPool) {
    let mut input = new_prospect("John", "Doe", "john@x.com");
    input.company = Some("Tech Corp".to_string());
    ProspectRepo::create(&pool, &input).await.unwrap();
    ProspectRepo::create(&pool, &new_prospect("Alice", "Smith", "alice@y.com"))
        .await
        .unwrap();

    // Matches first_name case-insensitively.
    let by_name = ProspectRepo::list(
        &pool,
        &ProspectFilter {
            search: Some("JOHN".to_string()),
            ..filter()
        },
    )
    .await
    .unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].email, "john@x.com");

    // Matches company substring.
    let by_company = ProspectRepo::list(
        &pool,
        &ProspectFilter {
            search: Some("tech".to_string()),
            ..filter()
        },
    )
    .await
    .unwrap();
    assert_eq!(by_company.len(), 1);

    // No match at all.
    let none = ProspectRepo::list(
        &pool,
        &ProspectFilter {
            search: Some("zzz".to_string()),
            ..filter()
        },
    )
    .await
    .unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn company_filter_is_exact(pool: PgPool) {
    let mut input = new_prospect("John", "Doe", "john@x.com");
    input.company = Some("Tech Corp".to_string());
    ProspectRepo::create(&pool, &input).await.unwrap();

    let exact = ProspectRepo::list(
        &pool,
        &ProspectFilter {
            company: Some("Tech Corp".to_string()),
            ..filter()
        },
    )
    .await
    .unwrap();
    assert_eq!(exact.len(), 1);

    let partial = ProspectRepo::list(
        &pool,
        &ProspectFilter {
            company: Some("Tech".to_string()),
            ..filter()
        },
    )
    .await
    .unwrap();
    assert!(partial.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn limit_and_offset_page_through_results(pool: PgPool) {
    for i in 0..5 {
        ProspectRepo::create(&pool, &new_prospect("P", "N", &format!("p{i}@x.com")))
            .await
            .unwrap();
    }

    let page = ProspectRepo::list(
        &pool,
        &ProspectFilter {
            limit: Some(2),
            offset: Some(1),
            ..filter()
        },
    )
    .await
    .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].email, "p3@x.com");
    assert_eq!(page[1].email, "p2@x.com");
}

// ---------------------------------------------------------------------------
// Read by id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id_returns_exact_row_or_none(pool: PgPool) {
    let created = ProspectRepo::create(&pool, &new_prospect("John", "Doe", "john@x.com"))
        .await
        .unwrap();

    let found = ProspectRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found.unwrap().email, "john@x.com");

    let missing = ProspectRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_leaves_omitted_fields_unchanged(pool: PgPool) {
    let mut input = new_prospect("John", "Doe", "john@x.com");
    input.company = Some("Tech Corp".to_string());
    let created = ProspectRepo::create(&pool, &input).await.unwrap();

    let updated = ProspectRepo::update(
        &pool,
        created.id,
        &UpdateProspect {
            first_name: Some("Johnny".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.first_name, "Johnny");
    assert_eq!(updated.last_name, "Doe");
    assert_eq!(updated.email, "john@x.com");
    assert_eq!(updated.company, Some("Tech Corp".to_string()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_explicit_null_clears_field(pool: PgPool) {
    let mut input = new_prospect("John", "Doe", "john@x.com");
    input.company = Some("Tech Corp".to_string());
    input.estimated_value = Some(50_000.0);
    let created = ProspectRepo::create(&pool, &input).await.unwrap();

    let updated = ProspectRepo::update(
        &pool,
        created.id,
        &UpdateProspect {
            company: Patch::Null,
            estimated_value: Patch::Null,
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.company, None);
    assert_eq!(updated.estimated_value, None);
    // Untouched fields survive.
    assert_eq!(updated.email, "john@x.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_value_replaces_field(pool: PgPool) {
    let created = ProspectRepo::create(&pool, &new_prospect("John", "Doe", "john@x.com"))
        .await
        .unwrap();

    let updated = ProspectRepo::update(
        &pool,
        created.id,
        &UpdateProspect {
            phone: Patch::Value("+1234567890".to_string()),
            status: Some(ProspectStatus::Negotiation),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.phone, Some("+1234567890".to_string()));
    assert_eq!(updated.status, ProspectStatus::Negotiation);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_refreshes_updated_at_even_without_changes(pool: PgPool) {
    let created = ProspectRepo::create(&pool, &new_prospect("John", "Doe", "john@x.com"))
        .await
        .unwrap();

    let updated = ProspectRepo::update(&pool, created.id, &UpdateProspect::default())
        .await
        .unwrap()
        .unwrap();

    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.created_at <= updated.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_unknown_id_returns_none(pool: PgPool) {
    let result = ProspectRepo::update(&pool, 999_999, &UpdateProspect::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_moves_freely_between_any_values(pool: PgPool) {
    let mut input = new_prospect("John", "Doe", "john@x.com");
    input.status = Some(ProspectStatus::ClosedLost);
    let created = ProspectRepo::create(&pool, &input).await.unwrap();

    // No transition graph: closed_lost may move straight back to new.
    let updated = ProspectRepo::update(
        &pool,
        created.id,
        &UpdateProspect {
            status: Some(ProspectStatus::New),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.status, ProspectStatus::New);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_then_find_returns_none(pool: PgPool) {
    let created = ProspectRepo::create(&pool, &new_prospect("John", "Doe", "john@x.com"))
        .await
        .unwrap();

    let deleted = ProspectRepo::delete(&pool, created.id).await.unwrap();
    assert!(deleted);

    let found = ProspectRepo::find_by_id(&pool, created.id).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_nonexistent_id_reports_not_found(pool: PgPool) {
    let deleted = ProspectRepo::delete(&pool, 999_999).await.unwrap();
    assert!(!deleted);
}
