//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{borrowings, health, materials, persons};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lendstock API",
        version = "1.0.0",
        description = "Inventory Lending Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Persons
        persons::list_persons,
        persons::get_person,
        persons::create_person,
        persons::update_person,
        persons::delete_person,
        // Materials
        materials::list_materials,
        materials::get_material,
        materials::create_material,
        materials::update_material,
        materials::delete_material,
        // Borrowings
        borrowings::list_borrowings,
        borrowings::create_borrowing,
        borrowings::return_borrowing,
    ),
    components(
        schemas(
            health::HealthResponse,
            crate::api::MessageResponse,
            crate::error::ErrorResponse,
            crate::models::person::Person,
            crate::models::person::CreatePerson,
            crate::models::person::UpdatePerson,
            crate::models::material::Material,
            crate::models::material::CreateMaterial,
            crate::models::material::UpdateMaterial,
            crate::models::borrowing::Borrowing,
            crate::models::borrowing::BorrowingDetails,
            crate::models::borrowing::CreateBorrowing,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "persons", description = "Borrower management"),
        (name = "materials", description = "Inventory stock management"),
        (name = "borrowings", description = "Who has borrowed what")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
}
