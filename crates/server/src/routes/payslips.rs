use axum::{extract::State, Json};

use service::payslip::Payslip;

use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/payslips", tag = "payslips",
    responses((status = 200, description = "All payslips in catalog order", body = [crate::openapi::PayslipDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Payslip>> {
    Json(state.payslips.list_payslips().to_vec())
}
