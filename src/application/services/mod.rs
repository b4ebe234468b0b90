// src/application/services/mod.rs
pub mod media;

use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            contact_messages::ContactMessageCommandService,
            faq_categories::FaqCategoryCommandService, faqs::FaqCommandService,
            hosting_plans::HostingPlanCommandService, hosting_types::HostingTypeCommandService,
            partners::PartnerCommandService, plan_features::PlanFeatureCommandService,
            portfolio::PortfolioCommandService, service_cards::ServiceCardCommandService,
            service_categories::ServiceCategoryCommandService, services::ServiceCommandService,
            site_settings::SiteSettingCommandService, team_members::TeamMemberCommandService,
            testimonials::TestimonialCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager, TokenRevocationStore},
            storage::FileStorage,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            contact_messages::ContactMessageQueryService,
            faq_categories::FaqCategoryQueryService, faqs::FaqQueryService,
            hosting_plans::HostingPlanQueryService, hosting_types::HostingTypeQueryService,
            partners::PartnerQueryService, plan_features::PlanFeatureQueryService,
            portfolio::PortfolioQueryService, service_cards::ServiceCardQueryService,
            service_categories::ServiceCategoryQueryService, services::ServiceQueryService,
            site_settings::SiteSettingQueryService, team_members::TeamMemberQueryService,
            testimonials::TestimonialQueryService,
        },
    },
    domain::{
        contact_message::ContactMessageRepository, faq::FaqRepository,
        faq_category::FaqCategoryRepository, hosting_plan::HostingPlanRepository,
        hosting_type::HostingTypeRepository, partner::PartnerRepository,
        plan_feature::PlanFeatureRepository, portfolio::PortfolioRepository,
        service::ServiceRepository, service_card::ServiceCardRepository,
        service_category::ServiceCategoryRepository, site_setting::SiteSettingRepository,
        slug::SlugAssigner, team_member::TeamMemberRepository,
        testimonial::TestimonialRepository, user::UserRepository,
    },
};
use media::MediaLibrary;

/// Persistence adapters, one per aggregate.
#[derive(Clone)]
pub struct RepositorySet {
    pub users: Arc<dyn UserRepository>,
    pub service_categories: Arc<dyn ServiceCategoryRepository>,
    pub services: Arc<dyn ServiceRepository>,
    pub hosting_plans: Arc<dyn HostingPlanRepository>,
    pub plan_features: Arc<dyn PlanFeatureRepository>,
    pub portfolio: Arc<dyn PortfolioRepository>,
    pub team_members: Arc<dyn TeamMemberRepository>,
    pub faq_categories: Arc<dyn FaqCategoryRepository>,
    pub faqs: Arc<dyn FaqRepository>,
    pub contact_messages: Arc<dyn ContactMessageRepository>,
    pub testimonials: Arc<dyn TestimonialRepository>,
    pub partners: Arc<dyn PartnerRepository>,
    pub service_cards: Arc<dyn ServiceCardRepository>,
    pub hosting_types: Arc<dyn HostingTypeRepository>,
    pub site_settings: Arc<dyn SiteSettingRepository>,
}

/// Non-persistence collaborators.
#[derive(Clone)]
pub struct ServicePorts {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub revocations: Arc<dyn TokenRevocationStore>,
    pub storage: Arc<dyn FileStorage>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

pub struct ApplicationServices {
    pub users: Arc<UserCommandService>,
    pub service_category_commands: Arc<ServiceCategoryCommandService>,
    pub service_category_queries: Arc<ServiceCategoryQueryService>,
    pub service_commands: Arc<ServiceCommandService>,
    pub service_queries: Arc<ServiceQueryService>,
    pub hosting_plan_commands: Arc<HostingPlanCommandService>,
    pub hosting_plan_queries: Arc<HostingPlanQueryService>,
    pub plan_feature_commands: Arc<PlanFeatureCommandService>,
    pub plan_feature_queries: Arc<PlanFeatureQueryService>,
    pub portfolio_commands: Arc<PortfolioCommandService>,
    pub portfolio_queries: Arc<PortfolioQueryService>,
    pub team_member_commands: Arc<TeamMemberCommandService>,
    pub team_member_queries: Arc<TeamMemberQueryService>,
    pub faq_category_commands: Arc<FaqCategoryCommandService>,
    pub faq_category_queries: Arc<FaqCategoryQueryService>,
    pub faq_commands: Arc<FaqCommandService>,
    pub faq_queries: Arc<FaqQueryService>,
    pub contact_message_commands: Arc<ContactMessageCommandService>,
    pub contact_message_queries: Arc<ContactMessageQueryService>,
    pub testimonial_commands: Arc<TestimonialCommandService>,
    pub testimonial_queries: Arc<TestimonialQueryService>,
    pub partner_commands: Arc<PartnerCommandService>,
    pub partner_queries: Arc<PartnerQueryService>,
    pub service_card_commands: Arc<ServiceCardCommandService>,
    pub service_card_queries: Arc<ServiceCardQueryService>,
    pub hosting_type_commands: Arc<HostingTypeCommandService>,
    pub hosting_type_queries: Arc<HostingTypeQueryService>,
    pub site_setting_commands: Arc<SiteSettingCommandService>,
    pub site_setting_queries: Arc<SiteSettingQueryService>,
}

impl ApplicationServices {
    pub fn new(repos: RepositorySet, ports: ServicePorts) -> Self {
        let ServicePorts {
            password_hasher,
            token_manager,
            revocations,
            storage,
            clock,
            slugger,
        } = ports;
        let slugs = Arc::new(SlugAssigner::new(slugger));
        let media = Arc::new(MediaLibrary::new(storage, Arc::clone(&clock)));

        let users = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            password_hasher,
            token_manager,
            revocations,
            Arc::clone(&clock),
        ));

        Self {
            users,
            service_category_commands: Arc::new(ServiceCategoryCommandService::new(
                Arc::clone(&repos.service_categories),
                Arc::clone(&slugs),
                Arc::clone(&clock),
            )),
            service_category_queries: Arc::new(ServiceCategoryQueryService::new(Arc::clone(
                &repos.service_categories,
            ))),
            service_commands: Arc::new(ServiceCommandService::new(
                Arc::clone(&repos.services),
                Arc::clone(&repos.service_categories),
                Arc::clone(&slugs),
                Arc::clone(&clock),
            )),
            service_queries: Arc::new(ServiceQueryService::new(
                Arc::clone(&repos.services),
                Arc::clone(&repos.service_categories),
            )),
            hosting_plan_commands: Arc::new(HostingPlanCommandService::new(
                Arc::clone(&repos.hosting_plans),
                Arc::clone(&repos.service_categories),
                Arc::clone(&slugs),
                Arc::clone(&clock),
            )),
            hosting_plan_queries: Arc::new(HostingPlanQueryService::new(
                Arc::clone(&repos.hosting_plans),
                Arc::clone(&repos.plan_features),
            )),
            plan_feature_commands: Arc::new(PlanFeatureCommandService::new(
                Arc::clone(&repos.plan_features),
                Arc::clone(&repos.hosting_plans),
            )),
            plan_feature_queries: Arc::new(PlanFeatureQueryService::new(
                Arc::clone(&repos.plan_features),
                Arc::clone(&repos.hosting_plans),
            )),
            portfolio_commands: Arc::new(PortfolioCommandService::new(
                Arc::clone(&repos.portfolio),
                Arc::clone(&repos.services),
                Arc::clone(&slugs),
                Arc::clone(&media),
                Arc::clone(&clock),
            )),
            portfolio_queries: Arc::new(PortfolioQueryService::new(
                Arc::clone(&repos.portfolio),
                Arc::clone(&clock),
            )),
            team_member_commands: Arc::new(TeamMemberCommandService::new(
                Arc::clone(&repos.team_members),
                Arc::clone(&media),
                Arc::clone(&clock),
            )),
            team_member_queries: Arc::new(TeamMemberQueryService::new(Arc::clone(
                &repos.team_members,
            ))),
            faq_category_commands: Arc::new(FaqCategoryCommandService::new(
                Arc::clone(&repos.faq_categories),
                Arc::clone(&repos.faqs),
                Arc::clone(&clock),
            )),
            faq_category_queries: Arc::new(FaqCategoryQueryService::new(
                Arc::clone(&repos.faq_categories),
                Arc::clone(&repos.faqs),
            )),
            faq_commands: Arc::new(FaqCommandService::new(
                Arc::clone(&repos.faqs),
                Arc::clone(&repos.faq_categories),
                Arc::clone(&clock),
            )),
            faq_queries: Arc::new(FaqQueryService::new(
                Arc::clone(&repos.faqs),
                Arc::clone(&repos.faq_categories),
            )),
            contact_message_commands: Arc::new(ContactMessageCommandService::new(
                Arc::clone(&repos.contact_messages),
                Arc::clone(&clock),
            )),
            contact_message_queries: Arc::new(ContactMessageQueryService::new(
                Arc::clone(&repos.contact_messages),
                Arc::clone(&clock),
            )),
            testimonial_commands: Arc::new(TestimonialCommandService::new(
                Arc::clone(&repos.testimonials),
                Arc::clone(&repos.services),
                Arc::clone(&media),
                Arc::clone(&clock),
            )),
            testimonial_queries: Arc::new(TestimonialQueryService::new(
                Arc::clone(&repos.testimonials),
                Arc::clone(&repos.services),
            )),
            partner_commands: Arc::new(PartnerCommandService::new(
                Arc::clone(&repos.partners),
                Arc::clone(&media),
                Arc::clone(&clock),
            )),
            partner_queries: Arc::new(PartnerQueryService::new(Arc::clone(&repos.partners))),
            service_card_commands: Arc::new(ServiceCardCommandService::new(
                Arc::clone(&repos.service_cards),
                Arc::clone(&media),
                Arc::clone(&clock),
            )),
            service_card_queries: Arc::new(ServiceCardQueryService::new(Arc::clone(
                &repos.service_cards,
            ))),
            hosting_type_commands: Arc::new(HostingTypeCommandService::new(
                Arc::clone(&repos.hosting_types),
                Arc::clone(&media),
                Arc::clone(&clock),
            )),
            hosting_type_queries: Arc::new(HostingTypeQueryService::new(Arc::clone(
                &repos.hosting_types,
            ))),
            site_setting_commands: Arc::new(SiteSettingCommandService::new(
                Arc::clone(&repos.site_settings),
                Arc::clone(&media),
                Arc::clone(&clock),
            )),
            site_setting_queries: Arc::new(SiteSettingQueryService::new(Arc::clone(
                &repos.site_settings,
            ))),
        }
    }

    /// Verifies a bearer token, including the revocation list.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.users.authenticate(token).await
    }
}
