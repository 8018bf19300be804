use serde::Deserialize;

// Fields are Option so missing keys reach the services and come back as the
// original backend's 400 validation messages instead of a body-rejection.

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateAccountRequest {
    pub approved: Option<bool>,
    pub role: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPrintRequest {
    pub username: Option<String>,
    pub product_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecidePrintRequest {
    pub username: Option<String>,
    pub product_id: Option<String>,
    pub status: Option<String>,
}
