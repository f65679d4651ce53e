use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Patient record as exchanged on `/get_patient` and `/post_patient`.
#[derive(Serialize, ToSchema)]
pub struct PatientDoc {
    pub id: Option<i64>,
    #[serde(rename = "full-name")]
    pub name: Option<String>,
    pub age: Option<String>,
}

/// Patient DTO as exchanged on `/save`. `name` is accepted as an input alias.
#[derive(Serialize, ToSchema)]
pub struct PatientDtoDoc {
    pub id: Option<i64>,
    #[serde(rename = "full-name")]
    pub name: Option<String>,
    pub age: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::patients::get_patient,
        crate::routes::patients::post_patient,
        crate::routes::patients::delete_patient,
        crate::routes::patients::save,
        crate::routes::patients::list,
    ),
    components(
        schemas(
            HealthResponse,
            PatientDoc,
            PatientDtoDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "patient", description = "Patient records"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_patient_paths() {
        let doc = ApiDoc::openapi();
        for p in ["/get_patient", "/post_patient", "/delete_patient", "/save", "/patients", "/health"] {
            assert!(doc.paths.paths.contains_key(p), "missing {p}");
        }
    }

    #[test]
    fn patient_schema_uses_hyphenated_name() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let props = &json["components"]["schemas"]["PatientDoc"]["properties"];
        assert!(props.get("full-name").is_some());
        assert!(props.get("name").is_none());
    }
}
