//! One-shot notices carried across a POST → redirect → GET round trip.
//!
//! The message travels in a `flash` cookie holding the hex-encoded UTF-8
//! text, so non-ASCII messages survive header encoding. Reading a list view
//! consumes the cookie.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue},
    response::{IntoResponse, Redirect, Response},
};

pub const FLASH_COOKIE: &str = "flash";

/// The pending flash message of the current request, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flash(pub Option<String>);

impl Flash {
    /// Messages for view-data; empty when nothing is pending.
    pub fn into_messages(self) -> Vec<String> {
        self.0.into_iter().collect()
    }

    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let message = parts
            .headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .and_then(|(_, value)| decode_message(value));
        Ok(Flash(message))
    }
}

pub fn encode_message(message: &str) -> String {
    hex::encode(message.as_bytes())
}

pub fn decode_message(value: &str) -> Option<String> {
    let bytes = hex::decode(value).ok()?;
    String::from_utf8(bytes).ok().filter(|m| !m.is_empty())
}

/// 303 to `to`, leaving `message` for the next page view.
pub fn redirect_with_flash(to: &str, message: &str) -> Response {
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        FLASH_COOKIE,
        encode_message(message)
    );
    let mut response = Redirect::to(to).into_response();
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
        Err(e) => tracing::warn!("Dropping flash message: {e}"),
    }
    response
}

/// Attach a `Set-Cookie` that expires the flash cookie once it was read.
pub fn consume(flash: &Flash, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if flash.is_pending() {
        response.headers_mut().insert(
            header::SET_COOKIE,
            HeaderValue::from_static("flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax"),
        );
    }
    response
}
