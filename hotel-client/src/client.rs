//! Entry point tying configuration, session and resource clients together

use shared::Entity;
use shared::models::{
    Amenity, Company, ExtraService, Hotel, RatePlan, Reservation, Role, Room, RoomType, Tenant,
};
use std::sync::Arc;

use crate::account::AccountClient;
use crate::auth::{FileTokenStorage, MemoryTokenStorage, Session, TokenStorage};
use crate::config::ClientConfig;
use crate::endpoint::EndpointResolver;
use crate::error::ClientResult;
use crate::http::GatewayHttp;
use crate::resource::{ResourceClient, ResourceSpec};
use crate::resources;
use crate::user::UserClient;

/// Gateway client. Every resource client it hands out shares one
/// connection pool and one [`Session`].
#[derive(Debug, Clone)]
pub struct HotelClient {
    config: ClientConfig,
    http: GatewayHttp,
    resolver: EndpointResolver,
}

impl HotelClient {
    /// Token kept in `config.token_path` when set, otherwise in memory
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let storage: Arc<dyn TokenStorage> = match &config.token_path {
            Some(path) => Arc::new(FileTokenStorage::new(path)),
            None => Arc::new(MemoryTokenStorage::new()),
        };
        Self::with_storage(config, storage)
    }

    pub fn with_storage(config: ClientConfig, storage: Arc<dyn TokenStorage>) -> ClientResult<Self> {
        Self::with_session(config, Session::new(storage))
    }

    pub fn with_session(config: ClientConfig, session: Session) -> ClientResult<Self> {
        let http = GatewayHttp::new(config.timeout, session)?;
        let resolver = EndpointResolver::new(&config.gateway_url);
        tracing::debug!(gateway = %resolver.gateway_url(), "Hotel client ready");
        Ok(Self {
            config,
            http,
            resolver,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        self.http.session()
    }

    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    /// Client for any resource described by `spec`
    pub fn resource<T: Entity>(&self, spec: ResourceSpec) -> ResourceClient<T> {
        ResourceClient::new(
            self.http.clone(),
            self.resolver.clone(),
            spec,
            self.config.page_index_base,
        )
    }

    pub fn account(&self) -> AccountClient {
        AccountClient::new(self.http.clone(), self.resolver.clone())
    }

    pub fn hotels(&self) -> ResourceClient<Hotel> {
        self.resource(resources::HOTELS)
    }

    pub fn rooms(&self) -> ResourceClient<Room> {
        self.resource(resources::ROOMS)
    }

    pub fn room_types(&self) -> ResourceClient<RoomType> {
        self.resource(resources::ROOM_TYPES)
    }

    pub fn reservations(&self) -> ResourceClient<Reservation> {
        self.resource(resources::RESERVATIONS)
    }

    pub fn amenities(&self) -> ResourceClient<Amenity> {
        self.resource(resources::AMENITIES)
    }

    pub fn companies(&self) -> ResourceClient<Company> {
        self.resource(resources::COMPANIES)
    }

    pub fn users(&self) -> UserClient {
        UserClient::new(self.resource(resources::USERS))
    }

    pub fn roles(&self) -> ResourceClient<Role> {
        self.resource(resources::ROLES)
    }

    pub fn tenants(&self) -> ResourceClient<Tenant> {
        self.resource(resources::TENANTS)
    }

    pub fn extra_services(&self) -> ResourceClient<ExtraService> {
        self.resource(resources::EXTRA_SERVICES)
    }

    pub fn rate_plans(&self) -> ResourceClient<RatePlan> {
        self.resource(resources::RATE_PLANS)
    }
}
