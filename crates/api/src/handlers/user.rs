//! Handlers for the `/api/user` routes (account lifecycle and profile).
//!
//! Everything except logout and `auth/me` is public: these routes are how a
//! caller obtains a token. They forward form-encoded bodies.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use dormspace_core::envelope::unwrap_user;
use dormspace_core::messages;
use dormspace_core::paths;
use dormspace_core::validation::{
    EmailForm, LoginForm, RegisterForm, ResetPasswordForm, VerifyForm,
};
use reqwest::Method;
use serde_json::{json, Value};

use crate::cookie::{expired_session_cookie, session_cookie};
use crate::error::{GatewayError, GatewayResult};
use crate::handlers::form_body;
use crate::middleware::auth::{extract_token, BearerToken};
use crate::state::AppState;

/// `message` from the backend body, or `fallback`.
fn message_or(data: &Value, fallback: &str) -> String {
    data.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn require(present: bool, message: &str) -> GatewayResult<()> {
    if present {
        Ok(())
    } else {
        Err(GatewayError::BadRequest(message.into()))
    }
}

/// Attach a `Set-Cookie` header, skipping values that are not valid header
/// bytes.
fn with_cookie(mut response: Response, cookie: &str) -> Response {
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => tracing::warn!(error = %e, "Backend token is not a valid cookie value"),
    }
    response
}

// ---------------------------------------------------------------------------
// Public account routes
// ---------------------------------------------------------------------------

/// POST /api/user/register
///
/// Returns the registered email, the OTP lifetime and any token issued.
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> GatewayResult<Json<Value>> {
    let form: RegisterForm = form_body(body)?;

    let data = state
        .backend
        .forward_form(
            paths::USER_REGISTER,
            &[
                ("email", form.email.as_str()),
                ("password", form.password.as_str()),
                ("passwordConfirm", form.confirm_password.as_str()),
                ("username", form.username.as_str()),
            ],
            messages::REGISTRATION_FAILED,
        )
        .await?;

    let email = data
        .pointer("/data/email")
        .cloned()
        .unwrap_or_else(|| Value::String(form.email.clone()));

    Ok(Json(json!({
        "message": messages::REGISTRATION_SUCCEEDED,
        "email": email,
        "expirationMinutes": data.pointer("/data/expirationMinutes"),
        "token": data.get("token"),
    })))
}

/// POST /api/user/login
///
/// On success also sets the http-only session cookie carrying the token.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> GatewayResult<Response> {
    let form: LoginForm = form_body(body)?;
    require(
        !form.email.is_empty() && !form.password.is_empty(),
        messages::EMAIL_AND_PASSWORD_REQUIRED,
    )?;

    let data = state
        .backend
        .forward_form(
            paths::USER_LOGIN,
            &[("email", form.email.as_str()), ("password", form.password.as_str())],
            messages::LOGIN_FAILED,
        )
        .await?;

    let token = data.get("token").and_then(Value::as_str).map(str::to_string);
    let user = data
        .get("data")
        .filter(|v| !v.is_null())
        .or_else(|| data.get("user"))
        .cloned()
        .unwrap_or(Value::Null);

    let response = Json(json!({
        "message": message_or(&data, messages::LOGIN_SUCCEEDED),
        "token": token,
        "user": user,
    }))
    .into_response();

    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return Ok(response);
    };
    tracing::info!(email = %form.email, "Login succeeded, issuing session cookie");

    let config = &state.config;
    let cookie = session_cookie(
        &config.session_cookie_name,
        &token,
        config.session_cookie_max_age_secs,
        config.cookie_secure,
    );
    Ok(with_cookie(response, &cookie))
}

/// POST /api/user/verify
///
/// Confirms the emailed OTP; the backend answers with a token.
pub async fn verify(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> GatewayResult<Json<Value>> {
    let form: VerifyForm = form_body(body)?;
    require(
        !form.email.is_empty() && !form.otp.is_empty(),
        messages::EMAIL_AND_OTP_REQUIRED,
    )?;

    let data = state
        .backend
        .forward_form(
            paths::USER_VERIFY,
            &[("email", form.email.as_str()), ("otpCode", form.otp.as_str())],
            messages::VERIFICATION_FAILED,
        )
        .await?;

    Ok(Json(json!({
        "message": data.get("message"),
        "token": data.get("token"),
        "user": data.pointer("/data/email"),
    })))
}

/// POST /api/user/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> GatewayResult<Json<Value>> {
    let form: EmailForm = form_body(body)?;
    require(!form.email.is_empty(), messages::EMAIL_REQUIRED)?;

    let data = state
        .backend
        .forward_form(
            paths::USER_FORGOT_PASSWORD,
            &[("email", form.email.as_str())],
            messages::FORGOT_PASSWORD_FAILED,
        )
        .await?;

    Ok(Json(json!({ "message": message_or(&data, messages::FORGOT_PASSWORD_SENT) })))
}

/// POST /api/user/resend-otp
pub async fn resend_otp(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> GatewayResult<Json<Value>> {
    let form: EmailForm = form_body(body)?;
    require(!form.email.is_empty(), messages::EMAIL_REQUIRED)?;

    let data = state
        .backend
        .forward_form(
            paths::USER_RESEND_OTP,
            &[("email", form.email.as_str())],
            messages::RESEND_OTP_FAILED,
        )
        .await?;

    Ok(Json(json!({ "message": message_or(&data, messages::RESEND_OTP_SENT) })))
}

/// POST /api/user/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> GatewayResult<Json<Value>> {
    let form: ResetPasswordForm = form_body(body)?;
    require(
        !form.email.is_empty()
            && !form.otp_code.is_empty()
            && !form.password.is_empty()
            && !form.password_confirm.is_empty(),
        messages::ALL_FIELDS_REQUIRED,
    )?;

    let data = state
        .backend
        .forward_form(
            paths::USER_RESET_PASSWORD,
            &[
                ("email", form.email.as_str()),
                ("otpCode", form.otp_code.as_str()),
                ("password", form.password.as_str()),
                ("passwordConfirm", form.password_confirm.as_str()),
            ],
            messages::RESET_PASSWORD_FAILED,
        )
        .await?;

    Ok(Json(json!({
        "message": message_or(&data, messages::RESET_PASSWORD_SUCCEEDED),
    })))
}

// ---------------------------------------------------------------------------
// Session routes
// ---------------------------------------------------------------------------

/// POST /api/user/logout
///
/// Best effort: the backend is told when a token is available, but the
/// answer is always 200 and the session cookie is always expired.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let config = &state.config;

    if let Some(token) = extract_token(&headers, &config.session_cookie_name) {
        if let Err(e) = state
            .backend
            .forward_json(Method::POST, paths::USER_LOGOUT, &token, None, messages::LOGGED_OUT)
            .await
        {
            tracing::warn!(error = %e, "Backend logout failed, clearing session anyway");
        }
    }

    let response = Json(json!({ "message": messages::LOGGED_OUT })).into_response();
    with_cookie(
        response,
        &expired_session_cookie(&config.session_cookie_name, config.cookie_secure),
    )
}

/// GET /api/user/auth/me
///
/// Returns `{ "user": ... }` unwrapped from the backend's `data` / `user`
/// envelope.
pub async fn me(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> GatewayResult<Json<Value>> {
    let data = state
        .backend
        .forward_json(Method::GET, paths::USER_ME, &token, None, messages::FETCH_USER_FAILED)
        .await?;

    Ok(Json(json!({ "user": unwrap_user(&data) })))
}
