//! User Endpoints

use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, SignupRequest};
use super::{check, read_json, ApiClient};

pub async fn login(api: &ApiClient, args: &LoginRequest<'_>) -> Result<AuthResponse, ApiError> {
    log::debug!("[API] POST /user/login for {}", args.email);
    let request = api
        .post("/user/login")
        .json(args)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    read_json(request.send().await?).await
}

pub async fn signup(api: &ApiClient, args: &SignupRequest<'_>) -> Result<AuthResponse, ApiError> {
    log::debug!("[API] POST /user/signup for {}", args.email);
    let request = api
        .post("/user/signup")
        .json(args)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    read_json(request.send().await?).await
}

pub async fn logout(api: &ApiClient) -> Result<(), ApiError> {
    log::debug!("[API] GET /user/logout");
    check(api.get("/user/logout").send().await?).await?;
    Ok(())
}
