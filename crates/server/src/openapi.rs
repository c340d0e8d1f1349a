use serde::Serialize;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct AiCompanyDoc {
    #[serde(rename = "aiCompany")]
    pub ai_company: String,
}

#[derive(Serialize, ToSchema)]
pub struct AiFieldDoc {
    #[serde(rename = "aiField")]
    pub ai_field: String,
}

#[derive(ToSchema)]
pub struct JobInterestDoc { pub interest: String }

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::preferences::save_ai_company,
        crate::routes::preferences::get_ai_company,
        crate::routes::preferences::save_ai_field,
        crate::routes::preferences::get_ai_field,
        crate::routes::preferences::save_job_interest,
        crate::routes::preferences::get_job_interest,
    ),
    components(
        schemas(
            HealthResponse,
            AiCompanyDoc,
            AiFieldDoc,
            JobInterestDoc,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health"),
        (name = "preferences")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_preference_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/api/ai-company", "/api/ai-field", "/api/job-interest"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
