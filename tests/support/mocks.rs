// tests/support/mocks.rs
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use site_cms::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::{
        security::{PasswordHasher, TokenManager, TokenRevocationStore},
        storage::FileStorage,
        time::Clock,
    },
};
use site_cms::domain::{
    common::{Page, PageRequest},
    contact_message::{
        ContactMessage, ContactMessageChanges, ContactMessageFilter, ContactMessageRepository,
        ContactStats, MessageBulkAction, MessageStatus, NewContactMessage,
    },
    errors::{DomainError, DomainResult},
    hosting_plan::{
        HostingPlan, HostingPlanChanges, HostingPlanFilter, HostingPlanFlag, HostingPlanRepository,
        NewHostingPlan,
    },
    portfolio::{
        NewPortfolioItem, PortfolioChanges, PortfolioFilter, PortfolioFlag, PortfolioItem,
        PortfolioRepository,
    },
    service::{NewService, Service, ServiceChanges, ServiceFilter, ServiceRepository},
    service_category::{
        NewServiceCategory, ServiceCategory, ServiceCategoryChanges, ServiceCategoryFilter,
        ServiceCategoryRepository,
    },
    slug::{Slug, SlugLookup},
    user::{Email, NewUser, User, UserId, UserRepository},
};
use std::collections::{HashMap, HashSet};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

pub static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2025-03-10T09:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
});

/// Starts at [`FIXED_NOW`] and only moves when told to.
pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    pub fn new() -> Self {
        Self(Mutex::new(*FIXED_NOW))
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.0.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Stores `plain$<password>` so tests can read hashes back.
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain${password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(expected_hash == format!("plain${password}"))
    }
}

/// Delegates to a real token manager until issuing is switched off.
pub struct SwitchableTokens {
    inner: Arc<dyn TokenManager>,
    refuse_issue: AtomicBool,
}

impl SwitchableTokens {
    pub fn new(inner: Arc<dyn TokenManager>) -> Self {
        Self {
            inner,
            refuse_issue: AtomicBool::new(false),
        }
    }

    pub fn refuse_issue(&self) {
        self.refuse_issue.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl TokenManager for SwitchableTokens {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        if self.refuse_issue.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("signing key unavailable"));
        }
        self.inner.issue(subject).await
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.inner.authenticate(token).await
    }

    async fn authenticate_for_refresh(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.inner.authenticate_for_refresh(token).await
    }
}

#[derive(Default)]
pub struct MemoryRevocations(Mutex<HashSet<String>>);

#[async_trait]
impl TokenRevocationStore for MemoryRevocations {
    async fn revoke(&self, token_id: &str, _expires_at: DateTime<Utc>) -> ApplicationResult<()> {
        self.0.lock().unwrap().insert(token_id.to_string());
        Ok(())
    }

    async fn is_revoked(&self, token_id: &str) -> ApplicationResult<bool> {
        Ok(self.0.lock().unwrap().contains(token_id))
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    pub files: Mutex<HashMap<String, Bytes>>,
}

#[async_trait]
impl FileStorage for MemoryStorage {
    async fn put(
        &self,
        namespace: &str,
        file_name: &str,
        bytes: Bytes,
    ) -> ApplicationResult<String> {
        let path = format!("/uploads/{namespace}/{file_name}");
        self.files.lock().unwrap().insert(path.clone(), bytes);
        Ok(path)
    }

    async fn delete(&self, public_path: &str) -> ApplicationResult<()> {
        self.files.lock().unwrap().remove(public_path);
        Ok(())
    }

    fn owns(&self, reference: &str) -> bool {
        reference.starts_with("/uploads/")
    }
}

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
    lose_race: AtomicBool,
}

impl InMemoryUsers {
    /// The next insert fails as if another request had stored the email first.
    pub fn lose_next_insert_race(&self) {
        self.lose_race.store(true, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn emails(&self) -> Vec<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .map(|user| user.email.to_string())
            .collect()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if self.lose_race.swap(false, Ordering::SeqCst)
            || rows.iter().any(|user| user.email == new_user.email)
        {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let user = User {
            id: UserId::new(rows.len() as i64 + 1)?,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|user| &user.email == email)
            .cloned())
    }

    async fn find_created_since(
        &self,
        email: &Email,
        since: DateTime<Utc>,
    ) -> DomainResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|user| &user.email == email && user.created_at > since)
            .cloned())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.rows.lock().unwrap().retain(|user| user.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryServiceCategories {
    rows: Mutex<Vec<ServiceCategory>>,
    dependents: Mutex<HashMap<i64, u64>>,
}

impl InMemoryServiceCategories {
    /// Pretend `count` services or plans point at category `id`.
    pub fn set_dependents(&self, id: i64, count: u64) {
        self.dependents.lock().unwrap().insert(id, count);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn with_row<T>(
        &self,
        id: i64,
        f: impl FnOnce(&mut ServiceCategory) -> T,
    ) -> DomainResult<T> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::not_found("service category"))?;
        Ok(f(row))
    }
}

#[async_trait]
impl SlugLookup for InMemoryServiceCategories {
    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|row| &row.slug == slug && Some(row.id) != exclude_id))
    }
}

#[async_trait]
impl ServiceCategoryRepository for InMemoryServiceCategories {
    async fn list(&self, filter: &ServiceCategoryFilter) -> DomainResult<Vec<ServiceCategory>> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| filter.active.is_none_or(|active| row.is_active == active))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.name.cmp(&b.name)));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<ServiceCategory>> {
        Ok(self.rows.lock().unwrap().iter().find(|row| row.id == id).cloned())
    }

    async fn insert(&self, category: NewServiceCategory) -> DomainResult<ServiceCategory> {
        let mut rows = self.rows.lock().unwrap();
        let row = ServiceCategory {
            id: rows.iter().map(|row| row.id).max().unwrap_or(0) + 1,
            name: category.name,
            slug: category.slug,
            description: category.description,
            icon: category.icon,
            sort_order: category.sort_order,
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.created_at,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: i64,
        changes: ServiceCategoryChanges,
    ) -> DomainResult<ServiceCategory> {
        self.with_row(id, |row| {
            if let Some(name) = changes.name {
                row.name = name;
            }
            if let Some(slug) = changes.slug {
                row.slug = slug;
            }
            if let Some(description) = changes.description {
                row.description = description;
            }
            if let Some(icon) = changes.icon {
                row.icon = icon;
            }
            if let Some(sort_order) = changes.sort_order {
                row.sort_order = sort_order;
            }
            if let Some(is_active) = changes.is_active {
                row.is_active = is_active;
            }
            row.updated_at = changes.updated_at;
            row.clone()
        })
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }

    async fn toggle_active(&self, id: i64, at: DateTime<Utc>) -> DomainResult<ServiceCategory> {
        self.with_row(id, |row| {
            row.is_active = !row.is_active;
            row.updated_at = at;
            row.clone()
        })
    }

    async fn count_dependents(&self, id: i64) -> DomainResult<u64> {
        Ok(self.dependents.lock().unwrap().get(&id).copied().unwrap_or(0))
    }
}

#[derive(Default)]
pub struct InMemoryServices {
    rows: Mutex<Vec<Service>>,
}

impl InMemoryServices {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl SlugLookup for InMemoryServices {
    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|row| &row.slug == slug && Some(row.id) != exclude_id))
    }
}

#[async_trait]
impl ServiceRepository for InMemoryServices {
    async fn list(&self, filter: &ServiceFilter) -> DomainResult<Vec<Service>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| filter.active.is_none_or(|active| row.is_active == active))
            .filter(|row| filter.category_id.is_none_or(|id| row.category_id == Some(id)))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Service>> {
        Ok(self.rows.lock().unwrap().iter().find(|row| row.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Service>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.slug.as_str() == slug)
            .cloned())
    }

    async fn insert(&self, service: NewService) -> DomainResult<Service> {
        let mut rows = self.rows.lock().unwrap();
        let row = Service {
            id: rows.len() as i64 + 1,
            name: service.name,
            slug: service.slug,
            description: service.description,
            category_id: service.category_id,
            category: None,
            icon: service.icon,
            is_active: service.is_active,
            sort_order: service.sort_order,
            created_at: service.created_at,
            updated_at: service.created_at,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, changes: ServiceChanges) -> DomainResult<Service> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::not_found("service"))?;
        if let Some(name) = changes.name {
            row.name = name;
        }
        if let Some(slug) = changes.slug {
            row.slug = slug;
        }
        if let Some(description) = changes.description {
            row.description = description;
        }
        if let Some(category_id) = changes.category_id {
            row.category_id = category_id;
        }
        if let Some(icon) = changes.icon {
            row.icon = icon;
        }
        if let Some(is_active) = changes.is_active {
            row.is_active = is_active;
        }
        row.updated_at = changes.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }

    async fn toggle_active(&self, id: i64, at: DateTime<Utc>) -> DomainResult<Service> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::not_found("service"))?;
        row.is_active = !row.is_active;
        row.updated_at = at;
        Ok(row.clone())
    }
}

#[derive(Default)]
pub struct InMemoryHostingPlans {
    rows: Mutex<Vec<HostingPlan>>,
}

impl InMemoryHostingPlans {
    pub fn slugs(&self) -> Vec<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .map(|row| row.slug.to_string())
            .collect()
    }
}

#[async_trait]
impl SlugLookup for InMemoryHostingPlans {
    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|row| &row.slug == slug && Some(row.id) != exclude_id))
    }
}

#[async_trait]
impl HostingPlanRepository for InMemoryHostingPlans {
    async fn list(&self, filter: &HostingPlanFilter) -> DomainResult<Vec<HostingPlan>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| filter.active.is_none_or(|active| row.is_active == active))
            .filter(|row| filter.category_id.is_none_or(|id| row.category_id == id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<HostingPlan>> {
        Ok(self.rows.lock().unwrap().iter().find(|row| row.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<HostingPlan>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.slug.as_str() == slug)
            .cloned())
    }

    async fn insert(&self, plan: NewHostingPlan) -> DomainResult<HostingPlan> {
        let mut rows = self.rows.lock().unwrap();
        let row = HostingPlan {
            id: rows.len() as i64 + 1,
            name: plan.name,
            slug: plan.slug,
            description: plan.description,
            logo_url: plan.logo_url,
            category_id: plan.category_id,
            category: None,
            pricing: plan.pricing,
            is_highlighted: plan.is_highlighted,
            is_popular: plan.is_popular,
            is_active: plan.is_active,
            sort_order: plan.sort_order,
            created_at: plan.created_at,
            updated_at: plan.created_at,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, changes: HostingPlanChanges) -> DomainResult<HostingPlan> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::not_found("hosting plan"))?;
        if let Some(name) = changes.name {
            row.name = name;
        }
        if let Some(slug) = changes.slug {
            row.slug = slug;
        }
        if let Some(description) = changes.description {
            row.description = description;
        }
        row.updated_at = changes.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }

    async fn toggle(
        &self,
        id: i64,
        flag: HostingPlanFlag,
        at: DateTime<Utc>,
    ) -> DomainResult<HostingPlan> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::not_found("hosting plan"))?;
        let value = match flag {
            HostingPlanFlag::Active => &mut row.is_active,
            HostingPlanFlag::Highlighted => &mut row.is_highlighted,
            HostingPlanFlag::Popular => &mut row.is_popular,
        };
        *value = !*value;
        row.updated_at = at;
        Ok(row.clone())
    }
}

#[derive(Default)]
pub struct InMemoryPortfolio {
    rows: Mutex<Vec<PortfolioItem>>,
}

#[async_trait]
impl SlugLookup for InMemoryPortfolio {
    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|row| &row.slug == slug && Some(row.id) != exclude_id))
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolio {
    async fn list_page(
        &self,
        filter: &PortfolioFilter,
        page: PageRequest,
    ) -> DomainResult<Page<PortfolioItem>> {
        let rows = self.rows.lock().unwrap();
        let matching: Vec<_> = rows
            .iter()
            .filter(|row| filter.published.is_none_or(|published| row.is_published == published))
            .filter(|row| filter.featured.is_none_or(|featured| row.is_featured == featured))
            .cloned()
            .collect();
        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .collect();
        Ok(Page::new(items, total, page))
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<PortfolioItem>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.slug.as_str() == slug)
            .cloned())
    }

    async fn insert(&self, item: NewPortfolioItem) -> DomainResult<PortfolioItem> {
        let mut rows = self.rows.lock().unwrap();
        let row = PortfolioItem {
            id: rows.len() as i64 + 1,
            title: item.title,
            slug: item.slug,
            description: item.description,
            client_name: item.client_name,
            project_url: item.project_url,
            featured_image: item.featured_image,
            gallery_images: item.gallery_images,
            service_id: item.service_id,
            technologies_used: item.technologies_used,
            project_date: item.project_date,
            is_featured: item.is_featured,
            is_published: item.is_published,
            created_at: item.created_at,
            updated_at: item.created_at,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, changes: PortfolioChanges) -> DomainResult<PortfolioItem> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::not_found("portfolio item"))?;
        if let Some(title) = changes.title {
            row.title = title;
        }
        if let Some(slug) = changes.slug {
            row.slug = slug;
        }
        if let Some(client_name) = changes.client_name {
            row.client_name = client_name;
        }
        row.updated_at = changes.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }

    async fn toggle(
        &self,
        id: i64,
        flag: PortfolioFlag,
        at: DateTime<Utc>,
    ) -> DomainResult<PortfolioItem> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::not_found("portfolio item"))?;
        let value = match flag {
            PortfolioFlag::Featured => &mut row.is_featured,
            PortfolioFlag::Published => &mut row.is_published,
        };
        *value = !*value;
        row.updated_at = at;
        Ok(row.clone())
    }
}

#[derive(Default)]
pub struct InMemoryContactMessages {
    rows: Mutex<Vec<ContactMessage>>,
}

impl InMemoryContactMessages {
    pub fn status_of(&self, id: i64) -> Option<MessageStatus> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.status)
    }

    fn matching(&self, filter: &ContactMessageFilter) -> Vec<ContactMessage> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| filter.status.is_none_or(|status| row.status == status))
            .filter(|row| filter.created_from.is_none_or(|from| row.created_at >= from))
            .filter(|row| filter.created_before.is_none_or(|before| row.created_at < before))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessages {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let mut rows = self.rows.lock().unwrap();
        let row = ContactMessage {
            id: rows.len() as i64 + 1,
            name: message.name,
            email: message.email,
            phone: message.phone,
            company: message.company,
            subject: message.subject,
            message: message.message,
            service_interest: message.service_interest,
            budget_range: message.budget_range,
            preferred_contact: message.preferred_contact,
            status: MessageStatus::New,
            admin_notes: None,
            ip_address: message.ip_address,
            user_agent: message.user_agent,
            created_at: message.created_at,
            replied_at: None,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<ContactMessage>> {
        Ok(self.rows.lock().unwrap().iter().find(|row| row.id == id).cloned())
    }

    async fn list_page(
        &self,
        filter: &ContactMessageFilter,
        page: PageRequest,
    ) -> DomainResult<Page<ContactMessage>> {
        let rows = self.matching(filter);
        let total = rows.len() as u64;
        let items = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .collect();
        Ok(Page::new(items, total, page))
    }

    async fn list_all(&self, filter: &ContactMessageFilter) -> DomainResult<Vec<ContactMessage>> {
        Ok(self.matching(filter))
    }

    async fn update(
        &self,
        id: i64,
        changes: ContactMessageChanges,
    ) -> DomainResult<ContactMessage> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::not_found("contact message"))?;
        if let Some(status) = changes.status {
            row.status = status;
        }
        if let Some(notes) = changes.admin_notes {
            row.admin_notes = notes;
        }
        if let Some(replied_at) = changes.replied_at {
            row.replied_at = replied_at;
        }
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }

    async fn bulk_apply(
        &self,
        ids: &[i64],
        action: MessageBulkAction,
        admin_notes: Option<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        let Some(status) = action.target_status() else {
            rows.retain(|row| !ids.contains(&row.id));
            return Ok((before - rows.len()) as u64);
        };
        let mut touched = 0;
        for row in rows.iter_mut().filter(|row| ids.contains(&row.id)) {
            row.status = status;
            if status == MessageStatus::Replied {
                row.replied_at = Some(at);
            }
            if let Some(notes) = &admin_notes {
                row.admin_notes = Some(notes.clone());
            }
            touched += 1;
        }
        Ok(touched)
    }

    async fn stats(&self, _now: DateTime<Utc>) -> DomainResult<ContactStats> {
        let rows = self.rows.lock().unwrap();
        let count = |status: MessageStatus| {
            rows.iter().filter(|row| row.status == status).count() as u64
        };
        Ok(ContactStats {
            total: rows.len() as u64,
            new: count(MessageStatus::New),
            read: count(MessageStatus::Read),
            replied: count(MessageStatus::Replied),
            closed: count(MessageStatus::Closed),
            ..ContactStats::default()
        })
    }
}
