//! Generic CRUD client for one backend resource
//!
//! A [`ResourceSpec`] names the collection path and owning microservice;
//! [`ResourceClient`] turns it into list, page, get, create, update and
//! delete calls. Resources whose backend deviates from the usual routes
//! declare per-operation overrides instead of subclassing.

use http::Method;
use shared::{Entity, FilterSet, Page, QueryCriteria};
use std::fmt;
use std::marker::PhantomData;

use crate::config::PageIndexBase;
use crate::endpoint::EndpointResolver;
use crate::error::{ClientError, ClientResult};
use crate::http::{Auth, GatewayHttp};
use crate::query;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    PaginatedList,
    Get,
    Create,
    Update,
    Delete,
}

/// Where an operation's URL points, relative to the resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePath {
    /// `{collection}`
    Collection,
    /// `{collection}/{id}`
    Item,
    /// `{collection}/{suffix}`
    Suffix(&'static str),
    /// Path resolved on the owning microservice, outside the collection
    Service(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: RoutePath,
}

impl Route {
    pub const fn new(method: Method, path: RoutePath) -> Self {
        Self { method, path }
    }

    /// Route used when a resource declares no override
    pub fn default_for(operation: Operation) -> Self {
        match operation {
            Operation::List | Operation::PaginatedList => {
                Self::new(Method::GET, RoutePath::Collection)
            }
            Operation::Get => Self::new(Method::GET, RoutePath::Item),
            Operation::Create => Self::new(Method::POST, RoutePath::Collection),
            Operation::Update => Self::new(Method::PUT, RoutePath::Item),
            Operation::Delete => Self::new(Method::DELETE, RoutePath::Item),
        }
    }
}

/// Static description of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    pub path: &'static str,
    pub microservice: Option<&'static str>,
    pub routes: &'static [(Operation, Route)],
}

impl ResourceSpec {
    /// Resource owned by `microservice`
    pub const fn new(path: &'static str, microservice: &'static str) -> Self {
        Self {
            path,
            microservice: Some(microservice),
            routes: &[],
        }
    }

    /// Resource served by the gateway itself
    pub const fn gateway(path: &'static str) -> Self {
        Self {
            path,
            microservice: None,
            routes: &[],
        }
    }

    pub const fn with_routes(mut self, routes: &'static [(Operation, Route)]) -> Self {
        self.routes = routes;
        self
    }

    pub fn route(&self, operation: Operation) -> Route {
        self.routes
            .iter()
            .find(|(op, _)| *op == operation)
            .map(|(_, route)| route.clone())
            .unwrap_or_else(|| Route::default_for(operation))
    }

    /// Absolute URL of a route; `Item` routes need an id.
    pub fn url(
        &self,
        resolver: &EndpointResolver,
        path: RoutePath,
        id: Option<&dyn fmt::Display>,
    ) -> ClientResult<String> {
        let collection = resolver.resolve(self.path, self.microservice);
        match path {
            RoutePath::Collection => Ok(collection),
            RoutePath::Item => {
                let id = id.ok_or_else(|| {
                    ClientError::Validation(format!("{}: id is required", self.path))
                })?;
                Ok(format!("{collection}/{id}"))
            }
            RoutePath::Suffix(suffix) => {
                Ok(format!("{collection}/{}", suffix.trim_start_matches('/')))
            }
            RoutePath::Service(service_path) => {
                Ok(resolver.resolve(service_path, self.microservice))
            }
        }
    }
}

/// Typed client for one resource
pub struct ResourceClient<T> {
    http: GatewayHttp,
    resolver: EndpointResolver,
    spec: ResourceSpec,
    page_index_base: PageIndexBase,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            resolver: self.resolver.clone(),
            spec: self.spec,
            page_index_base: self.page_index_base,
            _entity: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ResourceClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("spec", &self.spec)
            .field("gateway", &self.resolver.gateway_url())
            .finish()
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(
        http: GatewayHttp,
        resolver: EndpointResolver,
        spec: ResourceSpec,
        page_index_base: PageIndexBase,
    ) -> Self {
        Self {
            http,
            resolver,
            spec,
            page_index_base,
            _entity: PhantomData,
        }
    }

    pub fn spec(&self) -> &ResourceSpec {
        &self.spec
    }

    /// Absolute URL of the collection
    pub fn collection_url(&self) -> String {
        self.resolver.resolve(self.spec.path, self.spec.microservice)
    }

    pub(crate) fn http(&self) -> &GatewayHttp {
        &self.http
    }

    pub(crate) fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    fn route_url(&self, operation: Operation, id: Option<T::Id>) -> ClientResult<(Route, String)> {
        let route = self.spec.route(operation);
        let url = self.spec.url(
            &self.resolver,
            route.path,
            id.as_ref().map(|id| id as &dyn fmt::Display),
        )?;
        Ok((route, url))
    }

    /// Every record, optionally narrowed by a raw query fragment
    pub async fn list(&self, extra_query: Option<&str>) -> ClientResult<Vec<T>> {
        let (_, url) = self.route_url(Operation::List, None)?;
        let url = match extra_query {
            Some(q) => query::append_query(&url, q),
            None => url,
        };
        self.http.get(&url).await
    }

    /// Every record matching the filters
    pub async fn list_matching(&self, filters: &FilterSet) -> ClientResult<Vec<T>> {
        let (_, url) = self.route_url(Operation::List, None)?;
        let url = query::append_filters(&url, filters);
        self.http.get(&url).await
    }

    /// One page of records plus the backend's total row count
    pub async fn paginated_list(&self, criteria: &QueryCriteria) -> ClientResult<Page<T>> {
        let (_, url) = self.route_url(Operation::PaginatedList, None)?;
        let url = query::encode_criteria(&url, criteria, self.page_index_base);
        let (items, total_count) = self.http.get_with_total(&url).await?;
        Ok(Page::new(items, total_count))
    }

    pub async fn get(&self, id: T::Id) -> ClientResult<T> {
        let (_, url) = self.route_url(Operation::Get, Some(id))?;
        self.http.get(&url).await
    }

    /// Persist a new record. Records that already carry an id are refused
    /// without a request.
    pub async fn create(&self, entity: &T) -> ClientResult<T> {
        if let Some(id) = entity.id() {
            return Err(ClientError::Validation(format!(
                "{}: a new record cannot already have an id ({id})",
                self.spec.path
            )));
        }
        let (route, url) = self.route_url(Operation::Create, None)?;
        self.send_entity(route, &url, entity).await
    }

    pub async fn update(&self, entity: &T) -> ClientResult<T> {
        let id = entity.id().ok_or_else(|| {
            ClientError::Validation(format!("{}: cannot update a record without an id", self.spec.path))
        })?;
        let (route, url) = self.route_url(Operation::Update, Some(id))?;
        self.send_entity(route, &url, entity).await
    }

    pub async fn delete(&self, id: T::Id) -> ClientResult<()> {
        let (route, url) = self.route_url(Operation::Delete, Some(id))?;
        if route.method == Method::DELETE {
            self.http.delete(&url).await
        } else {
            self.http
                .send_no_content(route.method, &url, &serde_json::Value::Null)
                .await
        }
    }

    // Some endpoints answer 201/200 with no body; the submitted record
    // stands in for the echo then.
    async fn send_entity(&self, route: Route, url: &str, entity: &T) -> ClientResult<T> {
        let saved = self
            .http
            .send_json::<T, T>(route.method, url, entity, Auth::Bearer)
            .await?;
        Ok(saved.unwrap_or_else(|| entity.clone()))
    }
}
