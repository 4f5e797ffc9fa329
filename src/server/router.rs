//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every admin endpoint is registered here with its OpenAPI annotations, and Swagger UI
//! is served at `/api/docs` for browsing the resulting document.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the router with every admin endpoint and Swagger UI.
///
/// Handlers sharing a path are registered in the same `routes!` call so their methods are
/// merged onto one route.
///
/// # Registered Endpoints
/// - `/api/admin/houses`, `/api/admin/houses/...`, `/api/admin/owner/{ownerName}`
/// - `/api/admin/bills`, `/api/admin/bills/...`
/// - `/api/admin/users`, `/api/admin/users/...`, `/api/admin/createUser`
/// - `/api/admin/reports`
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Billing Admin",
            description = "Administrative API for houses, bills and users"
        ),
        tags(
            (name = controller::house::HOUSE_TAG, description = "House management routes"),
            (name = controller::bill::BILL_TAG, description = "Bill management routes"),
            (name = controller::user::USER_TAG, description = "User management routes"),
            (name = controller::auth::AUTH_TAG, description = "Account signup route"),
            (name = controller::report::REPORT_TAG, description = "Billing report routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Houses
        .routes(routes!(
            controller::house::create_house,
            controller::house::get_all_houses
        ))
        .routes(routes!(
            controller::house::get_house_by_id,
            controller::house::delete_house
        ))
        .routes(routes!(controller::house::get_house_by_meter_number))
        .routes(routes!(controller::house::get_houses_by_city))
        .routes(routes!(controller::house::get_houses_by_state))
        .routes(routes!(controller::house::get_houses_by_user_id))
        .routes(routes!(controller::house::get_houses_by_owner_name))
        // Bills
        .routes(routes!(
            controller::bill::create_bill,
            controller::bill::get_all_bills
        ))
        .routes(routes!(
            controller::bill::get_bill_by_id,
            controller::bill::delete_bill
        ))
        .routes(routes!(controller::bill::get_bills_by_status))
        .routes(routes!(controller::bill::get_bills_by_house_id))
        .routes(routes!(controller::bill::get_bills_by_date_range))
        .routes(routes!(controller::bill::get_bills_by_due_date))
        .routes(routes!(controller::bill::get_bills_by_paid_date))
        // Users
        .routes(routes!(controller::user::update_user))
        .routes(routes!(
            controller::user::get_user_by_id,
            controller::user::delete_user
        ))
        .routes(routes!(controller::user::get_all_users))
        .routes(routes!(controller::user::get_user_by_username))
        .routes(routes!(controller::auth::signup))
        // Reports
        .routes(routes!(controller::report::get_all_reports))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
