use axum::{
    extract::{Form, State, rejection::FormRejection},
    http::{HeaderValue, StatusCode, header},
    response::{AppendHeaders, IntoResponse, Response},
};
use std::sync::Arc;

use crate::api_error::ApiError;
use crate::query_types::LoginForm;
use crate::{AppState, cookies, session};

const MISSING_LOGIN_FIELDS: &str = "Missing accountId or apiKey";

pub async fn login(
    State(state): State<Arc<AppState>>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let Ok(Form(form)) = form else {
        return Err(ApiError::BadRequest(MISSING_LOGIN_FIELDS.to_owned()));
    };
    let candidate = form
        .into_credentials()
        .ok_or_else(|| ApiError::BadRequest(MISSING_LOGIN_FIELDS.to_owned()))?;
    if !cookies::is_cookie_safe(&candidate.account_id) || !cookies::is_cookie_safe(&candidate.api_key)
    {
        return Err(ApiError::BadRequest(
            "Credentials contain characters not allowed in a cookie".to_owned(),
        ));
    }

    session::login(&state.client, &candidate).await?;

    let set_cookies = cookies::encode(&candidate, state.config.session_max_age)?;
    Ok(redirect_home(set_cookies))
}

pub async fn logout() -> Result<Response, ApiError> {
    Ok(redirect_home(cookies::encode_expired()?))
}

fn redirect_home(set_cookies: [HeaderValue; 2]) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, HeaderValue::from_static("/"))],
        AppendHeaders(set_cookies.map(|value| (header::SET_COOKIE, value))),
        (),
    )
        .into_response()
}
