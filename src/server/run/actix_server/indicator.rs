//! Implementation of the evidence query and indicator endpoints.

use actix_web::{
    get, post,
    web::{self, Json},
};

use crate::indicator::{
    calculate_oncokb_available_data_type, IndicatorQueryResp, OncoKbCardDataType,
};
use crate::query::evidence::{
    generate_partial_evidence_query, join_evidence_types, PartialEvidenceQuery,
};

use super::{evidence_types_param, CustomError};

/// Query parameters of the `/api/v1/query/evidence` endpoint.
#[derive(
    Debug,
    Clone,
    Default,
    serde::Serialize,
    serde::Deserialize,
    utoipa::IntoParams,
    utoipa::ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub struct EvidenceQuery {
    /// Comma-separated evidence types, defaults to the standard set.
    pub evidence_types: Option<String>,
}

/// Build the evidence part of an OncoKB query.
#[allow(clippy::unused_async)]
#[utoipa::path(
    get,
    operation_id = "queryEvidence",
    params(EvidenceQuery),
    responses(
        (status = 200, description = "Evidence query.", body = PartialEvidenceQuery),
        (status = 400, description = "Invalid query.", body = CustomError)
    )
)]
#[get("/api/v1/query/evidence")]
async fn handle_evidence(
    query: web::Query<EvidenceQuery>,
) -> actix_web::Result<Json<PartialEvidenceQuery>, CustomError> {
    let evidence_types =
        evidence_types_param(query.evidence_types.as_deref())?.map(|t| join_evidence_types(&t));
    Ok(Json(generate_partial_evidence_query(
        evidence_types.as_deref(),
    )))
}

/// Response of the `/api/v1/indicator/availableDataTypes` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailableDataTypesResponse {
    /// Card data types in order of first appearance.
    pub available_data_types: Vec<OncoKbCardDataType>,
}

/// Compute the available annotation card data types of the given responses.
#[allow(clippy::unused_async)]
#[utoipa::path(
    post,
    operation_id = "indicatorAvailableDataTypes",
    request_body = Vec<IndicatorQueryResp>,
    responses(
        (status = 200, description = "Available data types.", body = AvailableDataTypesResponse),
        (status = 400, description = "Invalid request.", body = CustomError)
    )
)]
#[post("/api/v1/indicator/availableDataTypes")]
async fn handle_available_data_types(
    body: Json<Vec<IndicatorQueryResp>>,
) -> actix_web::Result<Json<AvailableDataTypesResponse>, CustomError> {
    Ok(Json(AvailableDataTypesResponse {
        available_data_types: calculate_oncokb_available_data_type(body.iter()),
    }))
}

#[cfg(test)]
mod test {
    use actix_web::{http::StatusCode, test, App};
    use pretty_assertions::assert_eq;

    use super::*;

    #[actix_web::test]
    async fn evidence_default() {
        let app = test::init_service(App::new().service(handle_evidence)).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/query/evidence")
            .to_request();
        let resp: PartialEvidenceQuery = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp, generate_partial_evidence_query(None));
        assert!(!resp.highest_level_only);
        assert_eq!(resp.source, "cbioportal");
    }

    #[actix_web::test]
    async fn evidence_verbatim() {
        let app = test::init_service(App::new().service(handle_evidence)).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/query/evidence?evidence_types=VUS,ONCOGENIC")
            .to_request();
        let resp: PartialEvidenceQuery = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.evidence_types, "VUS,ONCOGENIC");
    }

    #[actix_web::test]
    async fn evidence_normalized() {
        let app = test::init_service(App::new().service(handle_evidence)).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/query/evidence?evidence_types=VUS,%20ONCOGENIC,")
            .to_request();
        let resp: PartialEvidenceQuery = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.evidence_types, "VUS,ONCOGENIC");
    }

    #[actix_web::test]
    async fn evidence_invalid() {
        let app = test::init_service(App::new().service(handle_evidence)).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/query/evidence?evidence_types=VUS,NOPE")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn available_data_types() -> Result<(), anyhow::Error> {
        let app = test::init_service(App::new().service(handle_available_data_types)).await;
        let data: Vec<IndicatorQueryResp> = serde_json::from_str(&std::fs::read_to_string(
            "tests/data/indicator/responses.json",
        )?)?;
        let req = test::TestRequest::post()
            .uri("/api/v1/indicator/availableDataTypes")
            .set_json(&data)
            .to_request();
        let resp: AvailableDataTypesResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            resp.available_data_types,
            vec![
                OncoKbCardDataType::Biological,
                OncoKbCardDataType::Txs,
                OncoKbCardDataType::Txr,
                OncoKbCardDataType::Dx,
            ]
        );

        Ok(())
    }

    #[actix_web::test]
    async fn available_data_types_empty() {
        let app = test::init_service(App::new().service(handle_available_data_types)).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/indicator/availableDataTypes")
            .set_json(Vec::<IndicatorQueryResp>::new())
            .to_request();
        let resp: AvailableDataTypesResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.available_data_types, Vec::<OncoKbCardDataType>::new());
    }

    #[actix_web::test]
    async fn available_data_types_malformed_body() {
        let app = test::init_service(App::new().configure(super::super::configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/indicator/availableDataTypes")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"not\": \"an array\"}")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: CustomError = test::read_body_json(resp).await;
        assert!(format!("{}", body).contains("Json deserialize error"));
    }
}
