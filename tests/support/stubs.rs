// tests/support/stubs.rs
//! A repository that holds nothing, for aggregates a test does not touch.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use site_cms::domain::{
    common::{Page, PageRequest, SortPosition},
    errors::{DomainError, DomainResult},
    faq::{Faq, FaqBulkAction, FaqChanges, FaqCounts, FaqFilter, FaqFlag, FaqRepository, NewFaq},
    faq_category::{
        FaqCategory, FaqCategoryChanges, FaqCategoryFilter, FaqCategoryRepository, NewFaqCategory,
    },
    hosting_type::{HostingType, HostingTypeChanges, HostingTypeRepository, NewHostingType},
    partner::{NewPartner, Partner, PartnerChanges, PartnerFilter, PartnerRepository},
    plan_feature::{
        NewPlanFeature, PlanFeature, PlanFeatureChanges, PlanFeatureFilter, PlanFeatureRepository,
    },
    service_card::{NewServiceCard, ServiceCard, ServiceCardChanges, ServiceCardRepository},
    site_setting::{
        NewSiteSetting, SettingKey, SiteSetting, SiteSettingChanges, SiteSettingRepository,
    },
    slug::{Slug, SlugLookup},
    team_member::{
        NewTeamMember, TeamMember, TeamMemberChanges, TeamMemberFilter, TeamMemberFlag,
        TeamMemberRepository,
    },
    testimonial::{
        NewTestimonial, Testimonial, TestimonialBulkAction, TestimonialChanges,
        TestimonialFilter, TestimonialFlag, TestimonialRepository, TestimonialStats,
    },
};
use std::collections::HashMap;

pub struct EmptyStore;

fn missing<T>() -> DomainResult<T> {
    Err(DomainError::not_found("record"))
}

fn rejected<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("writes are not supported here".into()))
}

#[async_trait]
impl SlugLookup for EmptyStore {
    async fn slug_exists(&self, _slug: &Slug, _exclude_id: Option<i64>) -> DomainResult<bool> {
        Ok(false)
    }
}

#[async_trait]
impl PlanFeatureRepository for EmptyStore {
    async fn list(&self, _filter: &PlanFeatureFilter) -> DomainResult<Vec<PlanFeature>> {
        Ok(vec![])
    }

    async fn find_by_id(&self, _id: i64) -> DomainResult<Option<PlanFeature>> {
        Ok(None)
    }

    async fn insert(&self, _feature: NewPlanFeature) -> DomainResult<PlanFeature> {
        rejected()
    }

    async fn insert_many(&self, _features: Vec<NewPlanFeature>) -> DomainResult<Vec<PlanFeature>> {
        rejected()
    }

    async fn update(&self, _id: i64, _changes: PlanFeatureChanges) -> DomainResult<PlanFeature> {
        missing()
    }

    async fn delete(&self, _id: i64) -> DomainResult<()> {
        missing()
    }

    async fn toggle_included(&self, _id: i64) -> DomainResult<PlanFeature> {
        missing()
    }
}

#[async_trait]
impl TeamMemberRepository for EmptyStore {
    async fn list(&self, _filter: &TeamMemberFilter) -> DomainResult<Vec<TeamMember>> {
        Ok(vec![])
    }

    async fn find_by_id(&self, _id: i64) -> DomainResult<Option<TeamMember>> {
        Ok(None)
    }

    async fn insert(&self, _member: NewTeamMember) -> DomainResult<TeamMember> {
        rejected()
    }

    async fn update(&self, _id: i64, _changes: TeamMemberChanges) -> DomainResult<TeamMember> {
        missing()
    }

    async fn delete(&self, _id: i64) -> DomainResult<()> {
        missing()
    }

    async fn toggle(&self, _id: i64, _flag: TeamMemberFlag) -> DomainResult<TeamMember> {
        missing()
    }
}

#[async_trait]
impl FaqCategoryRepository for EmptyStore {
    async fn list(&self, _filter: &FaqCategoryFilter) -> DomainResult<Vec<FaqCategory>> {
        Ok(vec![])
    }

    async fn find_by_id(&self, _id: i64) -> DomainResult<Option<FaqCategory>> {
        Ok(None)
    }

    async fn name_taken(&self, _name: &str, _exclude_id: Option<i64>) -> DomainResult<bool> {
        Ok(false)
    }

    async fn insert(&self, _category: NewFaqCategory) -> DomainResult<FaqCategory> {
        rejected()
    }

    async fn update(&self, _id: i64, _changes: FaqCategoryChanges) -> DomainResult<FaqCategory> {
        missing()
    }

    async fn delete(&self, _id: i64) -> DomainResult<()> {
        missing()
    }

    async fn toggle_active(&self, _id: i64) -> DomainResult<FaqCategory> {
        missing()
    }

    async fn reorder(&self, _positions: &[SortPosition]) -> DomainResult<()> {
        missing()
    }
}

#[async_trait]
impl FaqRepository for EmptyStore {
    async fn list(&self, _filter: &FaqFilter) -> DomainResult<Vec<Faq>> {
        Ok(vec![])
    }

    async fn find_by_id(&self, _id: i64) -> DomainResult<Option<Faq>> {
        Ok(None)
    }

    async fn insert(&self, _faq: NewFaq) -> DomainResult<Faq> {
        rejected()
    }

    async fn update(&self, _id: i64, _changes: FaqChanges) -> DomainResult<Faq> {
        missing()
    }

    async fn delete(&self, _id: i64) -> DomainResult<()> {
        missing()
    }

    async fn toggle(&self, _id: i64, _flag: FaqFlag, _at: DateTime<Utc>) -> DomainResult<Faq> {
        missing()
    }

    async fn reorder(&self, _positions: &[SortPosition], _at: DateTime<Utc>) -> DomainResult<()> {
        missing()
    }

    async fn bulk_apply(
        &self,
        _ids: &[i64],
        _action: FaqBulkAction,
        _category_id: Option<i64>,
        _at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        Ok(0)
    }

    async fn count_in_category(&self, _category_id: i64) -> DomainResult<u64> {
        Ok(0)
    }

    async fn counts_by_category(&self) -> DomainResult<HashMap<i64, FaqCounts>> {
        Ok(HashMap::new())
    }
}

#[async_trait]
impl TestimonialRepository for EmptyStore {
    async fn list(&self, _filter: &TestimonialFilter) -> DomainResult<Vec<Testimonial>> {
        Ok(vec![])
    }

    async fn list_page(
        &self,
        _filter: &TestimonialFilter,
        page: PageRequest,
    ) -> DomainResult<Page<Testimonial>> {
        Ok(Page::new(vec![], 0, page))
    }

    async fn find_by_id(&self, _id: i64) -> DomainResult<Option<Testimonial>> {
        Ok(None)
    }

    async fn insert(&self, _testimonial: NewTestimonial) -> DomainResult<Testimonial> {
        rejected()
    }

    async fn update(&self, _id: i64, _changes: TestimonialChanges) -> DomainResult<Testimonial> {
        missing()
    }

    async fn delete(&self, _id: i64) -> DomainResult<()> {
        missing()
    }

    async fn toggle(&self, _id: i64, _flag: TestimonialFlag) -> DomainResult<Testimonial> {
        missing()
    }

    async fn reorder(&self, _positions: &[SortPosition]) -> DomainResult<()> {
        missing()
    }

    async fn bulk_apply(
        &self,
        _ids: &[i64],
        _action: TestimonialBulkAction,
        _service_id: Option<i64>,
    ) -> DomainResult<u64> {
        Ok(0)
    }

    async fn stats(&self) -> DomainResult<TestimonialStats> {
        Ok(TestimonialStats::default())
    }
}

#[async_trait]
impl PartnerRepository for EmptyStore {
    async fn list(&self, _filter: &PartnerFilter) -> DomainResult<Vec<Partner>> {
        Ok(vec![])
    }

    async fn find_by_id(&self, _id: i64) -> DomainResult<Option<Partner>> {
        Ok(None)
    }

    async fn insert(&self, _partner: NewPartner) -> DomainResult<Partner> {
        rejected()
    }

    async fn update(&self, _id: i64, _changes: PartnerChanges) -> DomainResult<Partner> {
        missing()
    }

    async fn delete(&self, _id: i64) -> DomainResult<()> {
        missing()
    }
}

#[async_trait]
impl ServiceCardRepository for EmptyStore {
    async fn list(&self) -> DomainResult<Vec<ServiceCard>> {
        Ok(vec![])
    }

    async fn find_by_id(&self, _id: i64) -> DomainResult<Option<ServiceCard>> {
        Ok(None)
    }

    async fn insert(&self, _card: NewServiceCard) -> DomainResult<ServiceCard> {
        rejected()
    }

    async fn update(&self, _id: i64, _changes: ServiceCardChanges) -> DomainResult<ServiceCard> {
        missing()
    }

    async fn delete(&self, _id: i64) -> DomainResult<()> {
        missing()
    }
}

#[async_trait]
impl HostingTypeRepository for EmptyStore {
    async fn list(&self) -> DomainResult<Vec<HostingType>> {
        Ok(vec![])
    }

    async fn find_by_id(&self, _id: i64) -> DomainResult<Option<HostingType>> {
        Ok(None)
    }

    async fn insert(&self, _hosting_type: NewHostingType) -> DomainResult<HostingType> {
        rejected()
    }

    async fn update(&self, _id: i64, _changes: HostingTypeChanges) -> DomainResult<HostingType> {
        missing()
    }

    async fn delete(&self, _id: i64) -> DomainResult<()> {
        missing()
    }
}

#[async_trait]
impl SiteSettingRepository for EmptyStore {
    async fn list(&self) -> DomainResult<Vec<SiteSetting>> {
        Ok(vec![])
    }

    async fn find_by_key(&self, _key: &SettingKey) -> DomainResult<Option<SiteSetting>> {
        Ok(None)
    }

    async fn insert(&self, _setting: NewSiteSetting) -> DomainResult<SiteSetting> {
        rejected()
    }

    async fn update(
        &self,
        _key: &SettingKey,
        _changes: SiteSettingChanges,
    ) -> DomainResult<SiteSetting> {
        missing()
    }

    async fn delete(&self, _key: &SettingKey) -> DomainResult<()> {
        missing()
    }
}
