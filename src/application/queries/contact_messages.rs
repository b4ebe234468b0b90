// src/application/queries/contact_messages.rs
use std::sync::Arc;

use super::search_term;
use crate::{
    application::{
        dto::{ContactExportDto, ContactMessageDto, ContactStatsDto, PageDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        validation::FieldErrors,
    },
    domain::{
        common::PageRequest,
        contact_message::{ContactMessage, ContactMessageFilter, ContactMessageRepository},
    },
};
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

const DEFAULT_PER_PAGE: u32 = 20;

const CSV_HEADER: [&str; 14] = [
    "ID",
    "Name",
    "Email",
    "Phone",
    "Company",
    "Subject",
    "Message",
    "Service Interest",
    "Budget Range",
    "Preferred Contact",
    "Status",
    "Admin Notes",
    "Created At",
    "Replied At",
];

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListContactMessagesQuery {
    /// One of `new`, `read`, `replied`, `closed`.
    pub status: Option<String>,
    pub service_interest: Option<String>,
    pub budget_range: Option<String>,
    pub from_date: Option<NaiveDate>,
    /// Inclusive of the whole day.
    pub to_date: Option<NaiveDate>,
    pub recent_days: Option<u32>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExportContactMessagesQuery {
    /// `csv` or `json`.
    pub format: Option<String>,
    pub status: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone)]
pub enum ContactExport {
    Json(ContactExportDto),
    Csv { file_name: String, body: String },
}

pub struct ContactMessageQueryService {
    repo: Arc<dyn ContactMessageRepository>,
    clock: Arc<dyn Clock>,
}

impl ContactMessageQueryService {
    pub fn new(repo: Arc<dyn ContactMessageRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn list(
        &self,
        query: ListContactMessagesQuery,
    ) -> ApplicationResult<PageDto<ContactMessageDto>> {
        let mut errors = FieldErrors::new();
        let mut filter = date_filter(
            &mut errors,
            query.status.as_deref(),
            query.from_date,
            query.to_date,
        );
        errors.into_result()?;

        filter.service_interest = search_term(query.service_interest);
        filter.budget_range = search_term(query.budget_range);
        filter.search = search_term(query.search);
        if let Some(days) = query.recent_days {
            let since = self.clock.now() - chrono::Duration::days(i64::from(days));
            filter.created_from = Some(filter.created_from.map_or(since, |from| from.max(since)));
        }

        let page = PageRequest::new(query.page, query.per_page, DEFAULT_PER_PAGE);
        let messages = self.repo.list_page(&filter, page).await?;
        Ok(PageDto::from_page(messages))
    }

    pub async fn stats(&self) -> ApplicationResult<ContactStatsDto> {
        Ok(self.repo.stats(self.clock.now()).await?.into())
    }

    pub async fn export(
        &self,
        query: ExportContactMessagesQuery,
    ) -> ApplicationResult<ContactExport> {
        let mut errors = FieldErrors::new();
        let format = match query.format.as_deref().map(str::trim) {
            None | Some("") => {
                errors.add("format", "The format field is required.");
                None
            }
            Some("csv") => Some(ExportFormat::Csv),
            Some("json") => Some(ExportFormat::Json),
            Some(_) => {
                errors.add("format", "The selected format is invalid.");
                None
            }
        };
        let filter = date_filter(
            &mut errors,
            query.status.as_deref(),
            query.from_date,
            query.to_date,
        );
        errors.into_result()?;

        let messages = self.repo.list_all(&filter).await?;
        match format {
            Some(ExportFormat::Csv) => Ok(ContactExport::Csv {
                file_name: format!(
                    "contact_messages_{}.csv",
                    self.clock.now().format("%Y-%m-%d_%H-%M-%S")
                ),
                body: render_csv(&messages),
            }),
            Some(ExportFormat::Json) => Ok(ContactExport::Json(ContactExportDto {
                format: "json".into(),
                count: messages.len(),
                messages: messages.into_iter().map(Into::into).collect(),
            })),
            None => Err(ApplicationError::validation("The selected format is invalid.")),
        }
    }
}

fn date_filter(
    errors: &mut FieldErrors,
    status: Option<&str>,
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
) -> ContactMessageFilter {
    let status = match status.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match raw.parse() {
            Ok(status) => Some(status),
            Err(_) => {
                errors.add("status", "The selected status is invalid.");
                None
            }
        },
        None => None,
    };
    if let (Some(from), Some(to)) = (from_date, to_date)
        && to < from
    {
        errors.add(
            "to_date",
            "The to date must be a date after or equal to from date.",
        );
    }

    ContactMessageFilter {
        status,
        created_from: from_date.map(start_of_day),
        created_before: to_date
            .and_then(|date| date.checked_add_days(Days::new(1)))
            .map(start_of_day),
        ..Default::default()
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

fn render_csv(messages: &[ContactMessage]) -> String {
    let mut out = String::new();
    push_row(&mut out, CSV_HEADER.iter().map(|cell| (*cell).to_string()));
    for message in messages {
        let timestamp = |at: DateTime<Utc>| at.format("%Y-%m-%d %H:%M:%S").to_string();
        push_row(
            &mut out,
            [
                message.id.to_string(),
                message.name.clone(),
                message.email.clone(),
                message.phone.clone().unwrap_or_default(),
                message.company.clone().unwrap_or_default(),
                message.subject.clone().unwrap_or_default(),
                message.message.clone(),
                message.service_interest.clone().unwrap_or_default(),
                message.budget_range.clone().unwrap_or_default(),
                message.preferred_contact.as_str().to_string(),
                message.status.as_str().to_string(),
                message.admin_notes.clone().unwrap_or_default(),
                timestamp(message.created_at),
                message.replied_at.map(timestamp).unwrap_or_default(),
            ],
        );
    }
    out
}

fn push_row(out: &mut String, cells: impl IntoIterator<Item = String>) {
    let row: Vec<String> = cells.into_iter().map(|cell| escape_cell(&cell)).collect();
    out.push_str(&row.join(","));
    out.push_str("\r\n");
}

fn escape_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact_message::MessageStatus;

    #[test]
    fn to_date_covers_the_whole_day() {
        let mut errors = FieldErrors::new();
        let day = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let filter = date_filter(&mut errors, Some("replied"), Some(day), Some(day));
        assert!(errors.is_empty());
        assert_eq!(filter.status, Some(MessageStatus::Replied));
        assert_eq!(
            filter.created_before.unwrap() - filter.created_from.unwrap(),
            chrono::Duration::days(1)
        );
    }

    #[test]
    fn unknown_status_is_a_field_error() {
        let mut errors = FieldErrors::new();
        date_filter(&mut errors, Some("archived"), None, None);
        assert!(errors.contains("status"));
    }

    #[test]
    fn csv_cells_are_quoted_when_needed() {
        assert_eq!(escape_cell("plain"), "plain");
        assert_eq!(escape_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
