use actix_web::{
    get,
    web::{self, Json, Path},
};

use crate::query::evidence::QUERY_SOURCE;

use super::CustomError;

/// Software version specification.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize, utoipa::ToSchema)]
pub struct SoftwareVersions {
    /// Version of `oncokb-query`.
    pub oncokb_query: String,
    /// Version of the `actix-web` crate.
    pub actix_web: String,
}

impl SoftwareVersions {
    /// Create a new `SoftwareVersions` instance.
    pub fn new() -> Result<Self, anyhow::Error> {
        let oncokb_query = crate::built_info::PKG_VERSION.to_string();
        let actix_web = crate::built_info::DEPENDENCIES
            .iter()
            .find(|(name, _)| name == &"actix-web")
            .map(|(_, version)| version.to_string())
            .ok_or_else(|| anyhow::anyhow!("Failed to find actix-web version"))?;

        Ok(Self {
            oncokb_query,
            actix_web,
        })
    }
}

/// Response of the `/api/v1/versionsInfo` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize, utoipa::ToSchema)]
pub struct VersionsInfoResponse {
    /// Software versions specification.
    pub software: SoftwareVersions,
    /// Source reported to OncoKB in queries.
    pub query_source: String,
}

impl VersionsInfoResponse {
    /// Create a new `VersionsInfoResponse` instance.
    pub fn new() -> Result<Self, anyhow::Error> {
        Ok(Self {
            software: SoftwareVersions::new()?,
            query_source: QUERY_SOURCE.to_string(),
        })
    }
}

/// Query for version information.
#[allow(clippy::unused_async)]
#[utoipa::path(
    get,
    operation_id = "versionsInfo",
    responses(
        (status = 200, description = "Version information.", body = VersionsInfoResponse),
        (status = 400, description = "Problem determining version.", body = CustomError)
    )
)]
#[get("/api/v1/versionsInfo")]
async fn handle(
    _path: Path<()>,
    _query: web::Query<()>,
) -> actix_web::Result<Json<VersionsInfoResponse>, CustomError> {
    Ok(Json(VersionsInfoResponse::new().map_err(|e| {
        CustomError::new(anyhow::anyhow!("Problem determining version: {}", e))
    })?))
}
