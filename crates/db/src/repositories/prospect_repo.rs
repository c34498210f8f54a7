//! Repository for the `prospects` table.

use sqlx::PgPool;

use leadflow_core::types::DbId;

use crate::models::prospect::{CreateProspect, Prospect, ProspectFilter, UpdateProspect};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, phone, company, position, \
    status, priority, estimated_value, notes, created_at, updated_at";

/// Upper bound applied to a caller-supplied page size. Listing without a
/// limit returns all matching rows.
const MAX_LIMIT: i64 = 500;

/// Provides CRUD operations for prospects.
pub struct ProspectRepo;

impl ProspectRepo {
    /// Insert a new prospect, returning the created row.
    ///
    /// If `status` is `None`, defaults to `new`. If `priority` is `None`,
    /// defaults to `medium`. `created_at` and `updated_at` are stamped by
    /// the table defaults to the same value.
    pub async fn create(pool: &PgPool, input: &CreateProspect) -> Result<Prospect, sqlx::Error> {
        let query = format!(
            "INSERT INTO prospects
                (first_name, last_name, email, phone, company, position,
                 status, priority, estimated_value, notes)
             VALUES ($1, $2, $3, $4, $5, $6,
                     COALESCE($7, 'new'::prospect_status),
                     COALESCE($8, 'medium'::prospect_priority),
                     $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prospect>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.phone.as_deref())
            .bind(input.company.as_deref())
            .bind(input.position.as_deref())
            .bind(input.status)
            .bind(input.priority)
            .bind(input.estimated_value)
            .bind(input.notes.as_deref())
            .fetch_one(pool)
            .await
    }

    /// List prospects matching the given filter, most recently created
    /// first (ties broken by `id DESC` for determinism).
    ///
    /// Every supplied predicate is ANDed in; an empty filter returns all
    /// rows. `search` matches case-insensitively as a substring against
    /// first_name, last_name, email, and company.
    pub async fn list(pool: &PgPool, filter: &ProspectFilter) -> Result<Vec<Prospect>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.status.is_some() {
            conditions.push(format!("status = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.priority.is_some() {
            conditions.push(format!("priority = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.company.is_some() {
            conditions.push(format!("company = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.search.is_some() {
            conditions.push(format!(
                "(first_name ILIKE ${bind_idx} OR last_name ILIKE ${bind_idx} \
                 OR email ILIKE ${bind_idx} OR company ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let mut query = format!(
            "SELECT {COLUMNS} FROM prospects {where_clause} \
             ORDER BY created_at DESC, id DESC"
        );
        if filter.limit.is_some() {
            query.push_str(&format!(" LIMIT ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.offset.is_some() {
            query.push_str(&format!(" OFFSET ${bind_idx}"));
        }

        let mut q = sqlx::query_as::<_, Prospect>(&query);

        // Bind dynamic parameters in order.
        if let Some(status) = filter.status {
            q = q.bind(status);
        }
        if let Some(priority) = filter.priority {
            q = q.bind(priority);
        }
        if let Some(ref company) = filter.company {
            q = q.bind(company);
        }
        if let Some(ref search) = filter.search {
            q = q.bind(format!("%{search}%"));
        }
        if let Some(limit) = filter.limit {
            q = q.bind(limit.clamp(0, MAX_LIMIT));
        }
        if let Some(offset) = filter.offset {
            q = q.bind(offset.max(0));
        }

        q.fetch_all(pool).await
    }

    /// Find a prospect by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Prospect>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prospects WHERE id = $1");
        sqlx::query_as::<_, Prospect>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a prospect with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM prospects WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Partially update a prospect. Non-nullable fields merge with
    /// `COALESCE` (absent means unchanged); nullable fields carry a
    /// set-flag plus value so an explicit null clears the column.
    /// `updated_at` is refreshed on every successful call, even when all
    /// supplied values equal the stored ones.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProspect,
    ) -> Result<Option<Prospect>, sqlx::Error> {
        let query = format!(
            "UPDATE prospects SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = CASE WHEN $5 THEN $6 ELSE phone END,
                company = CASE WHEN $7 THEN $8 ELSE company END,
                position = CASE WHEN $9 THEN $10 ELSE position END,
                status = COALESCE($11, status),
                priority = COALESCE($12, priority),
                estimated_value = CASE WHEN $13 THEN $14 ELSE estimated_value END,
                notes = CASE WHEN $15 THEN $16 ELSE notes END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prospect>(&query)
            .bind(id)
            .bind(input.first_name.as_deref())
            .bind(input.last_name.as_deref())
            .bind(input.email.as_deref())
            .bind(input.phone.is_set())
            .bind(input.phone.as_deref())
            .bind(input.company.is_set())
            .bind(input.company.as_deref())
            .bind(input.position.is_set())
            .bind(input.position.as_deref())
            .bind(input.status)
            .bind(input.priority)
            .bind(input.estimated_value.is_set())
            .bind(input.estimated_value.as_option().copied())
            .bind(input.notes.is_set())
            .bind(input.notes.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a prospect by ID. Returns `true` if a row was removed.
    ///
    /// Child photos and activities are not cascaded; a prospect that still
    /// has them fails the foreign key check and the caller decides policy.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prospects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
