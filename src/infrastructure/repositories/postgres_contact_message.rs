// src/infrastructure/repositories/postgres_contact_message.rs
use super::{map_sqlx, map_sqlx_delete, sql};
use crate::domain::{
    common::{Page, PageRequest},
    contact_message::{
        ContactMessage, ContactMessageChanges, ContactMessageFilter, ContactMessageRepository,
        ContactStats, LabelCount, MessageBulkAction, NewContactMessage,
    },
    errors::{DomainError, DomainResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, name, email, phone, company, subject, message, service_interest,
    budget_range, preferred_contact, status, admin_notes, ip_address, user_agent, created_at,
    replied_at";

#[derive(Clone)]
pub struct PostgresContactMessageRepository {
    pool: PgPool,
}

impl PostgresContactMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_rows(
        &self,
        filter: &ContactMessageFilter,
        page: Option<PageRequest>,
    ) -> DomainResult<Vec<ContactMessage>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM contact_messages"));
        push_filters(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC, id DESC");
        if let Some(page) = page {
            builder.push(" LIMIT ").push_bind(page.limit());
            builder.push(" OFFSET ").push_bind(page.offset());
        }
        let rows = builder
            .build_query_as::<ContactMessageRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(ContactMessage::try_from).collect()
    }

    async fn count_since(&self, since: DateTime<Utc>) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM contact_messages WHERE created_at >= $1",
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(sql::to_count(count))
    }

    async fn label_counts(
        &self,
        column: &str,
        limit: Option<i64>,
    ) -> DomainResult<Vec<LabelCount>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {column} AS label, COUNT(*) AS count FROM contact_messages
             WHERE {column} IS NOT NULL GROUP BY {column} ORDER BY count DESC, {column}"
        ));
        if let Some(limit) = limit {
            builder.push(" LIMIT ").push_bind(limit);
        }
        let rows = builder
            .build_query_as::<LabelCountRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows
            .into_iter()
            .map(|row| LabelCount {
                label: row.label,
                count: sql::to_count(row.count),
            })
            .collect())
    }
}

#[derive(Debug, FromRow)]
struct ContactMessageRow {
    id: i64,
    name: String,
    email: String,
    phone: Option<String>,
    company: Option<String>,
    subject: Option<String>,
    message: String,
    service_interest: Option<String>,
    budget_range: Option<String>,
    preferred_contact: String,
    status: String,
    admin_notes: Option<String>,
    ip_address: Option<String>,
    user_agent: Option<String>,
    created_at: DateTime<Utc>,
    replied_at: Option<DateTime<Utc>>,
}

impl TryFrom<ContactMessageRow> for ContactMessage {
    type Error = DomainError;

    fn try_from(row: ContactMessageRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            company: row.company,
            subject: row.subject,
            message: row.message,
            service_interest: row.service_interest,
            budget_range: row.budget_range,
            preferred_contact: row.preferred_contact.parse()?,
            status: row.status.parse()?,
            admin_notes: row.admin_notes,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            created_at: row.created_at,
            replied_at: row.replied_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct StatusTotalsRow {
    total: i64,
    new: i64,
    read: i64,
    replied: i64,
    closed: i64,
}

#[derive(Debug, FromRow)]
struct LabelCountRow {
    label: String,
    count: i64,
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &ContactMessageFilter) {
    let mut predicates = sql::Predicates::default();
    predicates.eq(builder, "status", filter.status.map(|status| status.as_str()));
    predicates.search(
        builder,
        &["service_interest"],
        filter.service_interest.as_deref(),
    );
    predicates.eq(builder, "budget_range", filter.budget_range.clone());
    if let Some(from) = filter.created_from {
        predicates.next(builder);
        builder.push("created_at >= ").push_bind(from);
    }
    if let Some(before) = filter.created_before {
        predicates.next(builder);
        builder.push("created_at < ").push_bind(before);
    }
    predicates.search(
        builder,
        &["name", "email", "company", "subject", "message"],
        filter.search.as_deref(),
    );
}

#[async_trait]
impl ContactMessageRepository for PostgresContactMessageRepository {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let row = sqlx::query_as::<_, ContactMessageRow>(&format!(
            "INSERT INTO contact_messages
                (name, email, phone, company, subject, message, service_interest, budget_range,
                 preferred_contact, status, ip_address, user_agent, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'new', $10, $11, $12)
             RETURNING {COLUMNS}"
        ))
        .bind(message.name)
        .bind(message.email)
        .bind(message.phone)
        .bind(message.company)
        .bind(message.subject)
        .bind(message.message)
        .bind(message.service_interest)
        .bind(message.budget_range)
        .bind(message.preferred_contact.as_str())
        .bind(message.ip_address)
        .bind(message.user_agent)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        ContactMessage::try_from(row)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<ContactMessage>> {
        let row = sqlx::query_as::<_, ContactMessageRow>(&format!(
            "SELECT {COLUMNS} FROM contact_messages WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(ContactMessage::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &ContactMessageFilter,
        page: PageRequest,
    ) -> DomainResult<Page<ContactMessage>> {
        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM contact_messages");
        push_filters(&mut count, filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        let items = self.fetch_rows(filter, Some(page)).await?;
        Ok(Page::new(items, sql::to_count(total), page))
    }

    async fn list_all(&self, filter: &ContactMessageFilter) -> DomainResult<Vec<ContactMessage>> {
        self.fetch_rows(filter, None).await
    }

    async fn update(
        &self,
        id: i64,
        changes: ContactMessageChanges,
    ) -> DomainResult<ContactMessage> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE contact_messages SET id = id");
        sql::set(&mut builder, "status", changes.status.map(|status| status.as_str()));
        sql::set(&mut builder, "admin_notes", changes.admin_notes);
        sql::set(&mut builder, "replied_at", changes.replied_at);
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<ContactMessageRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("contact message"))?;
        ContactMessage::try_from(row)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sql::delete_by_id(&self.pool, "contact_messages", id, "contact message").await
    }

    async fn bulk_apply(
        &self,
        ids: &[i64],
        action: MessageBulkAction,
        admin_notes: Option<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let Some(status) = action.target_status() else {
            let result = sqlx::query("DELETE FROM contact_messages WHERE id = ANY($1)")
                .bind(ids)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_delete)?;
            return Ok(result.rows_affected());
        };

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE contact_messages SET status = ");
        builder.push_bind(status.as_str());
        if action == MessageBulkAction::MarkReplied {
            builder.push(", replied_at = ").push_bind(at);
        }
        sql::set(&mut builder, "admin_notes", admin_notes);
        builder.push(" WHERE id = ANY(").push_bind(ids.to_vec()).push(")");
        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn stats(&self, now: DateTime<Utc>) -> DomainResult<ContactStats> {
        let totals = sqlx::query_as::<_, StatusTotalsRow>(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE status = 'new') AS new,
                    COUNT(*) FILTER (WHERE status = 'read') AS read,
                    COUNT(*) FILTER (WHERE status = 'replied') AS replied,
                    COUNT(*) FILTER (WHERE status = 'closed') AS closed
             FROM contact_messages",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let start_of_day = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        Ok(ContactStats {
            total: sql::to_count(totals.total),
            new: sql::to_count(totals.new),
            read: sql::to_count(totals.read),
            replied: sql::to_count(totals.replied),
            closed: sql::to_count(totals.closed),
            today: self.count_since(start_of_day).await?,
            this_week: self.count_since(now - Duration::days(7)).await?,
            this_month: self.count_since(now - Duration::days(30)).await?,
            top_services: self.label_counts("service_interest", Some(5)).await?,
            budget_distribution: self.label_counts("budget_range", None).await?,
        })
    }
}
