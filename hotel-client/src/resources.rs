//! Resource table of the platform

use http::Method;

use crate::resource::{Operation, ResourceSpec, Route, RoutePath};

pub const HOTELMS: &str = "hotelms";
pub const ORGANIZATIONMS: &str = "organizationms";
pub const USERMS: &str = "userms";
pub const RATEPLANMS: &str = "rateplanms";

pub const HOTELS: ResourceSpec = ResourceSpec::new("api/hotels", HOTELMS);
pub const ROOMS: ResourceSpec = ResourceSpec::new("api/rooms", HOTELMS);
pub const ROOM_TYPES: ResourceSpec = ResourceSpec::new("api/room-types", HOTELMS);
pub const RESERVATIONS: ResourceSpec = ResourceSpec::new("api/reservations", HOTELMS);
pub const AMENITIES: ResourceSpec = ResourceSpec::new("api/amenities", HOTELMS);

pub const COMPANIES: ResourceSpec = ResourceSpec::new("api/organizations", ORGANIZATIONMS);

pub const USERS: ResourceSpec = ResourceSpec::new("api/users", USERMS).with_routes(USER_ROUTES);
pub const ROLES: ResourceSpec = ResourceSpec::new("api/roles", USERMS);
pub const TENANTS: ResourceSpec = ResourceSpec::new("api/tenants", USERMS);

pub const EXTRA_SERVICES: ResourceSpec = ResourceSpec::new("api/extra-services", RATEPLANMS);
pub const RATE_PLANS: ResourceSpec = ResourceSpec::new("api/rate-plans", RATEPLANMS);

/// Users register through the account endpoint and page over a read-only view
const USER_ROUTES: &[(Operation, Route)] = &[
    (
        Operation::Create,
        Route::new(Method::POST, RoutePath::Service("api/register")),
    ),
    (
        Operation::Update,
        Route::new(Method::PUT, RoutePath::Suffix("update")),
    ),
    (
        Operation::PaginatedList,
        Route::new(Method::GET, RoutePath::Suffix("read-only")),
    ),
];

/// Password reset for a given login, on the user service
pub const CHANGE_PASSWORD_PATH: &str = "api/account/change-password-with-login";

/// Login endpoint, on the user service
pub const AUTHENTICATE_PATH: &str = "api/authenticate";
