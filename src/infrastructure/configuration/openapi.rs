//! OpenAPI document for the HTTP API.

use utoipa::OpenApi;

use crate::infrastructure::adapters::inbound::rest::health;

/// Route serving the generated document as JSON
pub const OPENAPI_PATH: &str = "/v3/api-docs";

#[derive(OpenApi)]
#[openapi(
    paths(health::health),
    tags(
        (name = "Health", description = "Liveness of the service"),
    ),
    info(
        title = "Hex Microservice Blueprint API",
        version = "v1",
        description = "Template microservice using Hexagonal Architecture and CQRS",
        contact(
            name = "Your Team",
            email = "team@example.com"
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_describes_the_blueprint() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Hex Microservice Blueprint API");
        assert_eq!(doc.info.version, "v1");

        let contact = doc.info.contact.expect("contact is set");
        assert_eq!(contact.name.as_deref(), Some("Your Team"));
        assert_eq!(contact.email.as_deref(), Some("team@example.com"));
    }

    #[test]
    fn health_path_is_documented() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/health").expect("/health documented");
        assert!(item.get.is_some());
    }
}
