use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::{
    api::models::{CreateNoteRequest, ErrorResponse, LoginRequest, RegisterRequest, UpdateNoteRequest},
    core::{
        models::{note::Note, user::UserDto},
        services::AuthResponse,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "Bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::register,
        super::handlers::login,
        super::handlers::list_notes,
        super::handlers::get_note,
        super::handlers::create_note,
        super::handlers::update_note,
        super::handlers::delete_note
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        CreateNoteRequest,
        UpdateNoteRequest,
        ErrorResponse,
        AuthResponse,
        UserDto,
        Note
    )),
    modifiers(&SecurityAddon),
    info(
        title = "Notebook API",
        description = "API for authenticated personal note-taking",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
