//! HTTP access to the activities server.
//!
//! `ActivitiesApi` is the seam between the view controller and the network.
//! The browser build talks through `HttpApi` (gloo-net); tests script their own.

#![allow(async_fn_in_trait)]

use gloo_net::http::{Request, Response};
use urlencoding::encode;
use web_sys::RequestCache;

use crate::error::Result;

pub fn activities_url(base: &str) -> String {
    format!("{}/activities", base.trim_end_matches('/'))
}

// `encodeURIComponent` leaves these unescaped on top of RFC 3986 unreserved.
const URI_COMPONENT_MARKS: &str = "!'()*";

/// Percent-encodes `value` exactly like JS `encodeURIComponent`.
pub fn encode_uri_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut buf = [0u8; 4];
    for c in value.chars() {
        if URI_COMPONENT_MARKS.contains(c) {
            out.push(c);
        } else {
            out.push_str(&encode(c.encode_utf8(&mut buf)));
        }
    }
    out
}

/// `{base}/activities/{activity}/signup?email={email}` with both values
/// passed through `encode_uri_component`.
pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        base.trim_end_matches('/'),
        encode_uri_component(activity),
        encode_uri_component(email)
    )
}

/// Status and body text; interpretation is left to the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait ActivitiesApi {
    /// `GET /activities`, bypassing any HTTP cache.
    async fn fetch_catalog(&self) -> Result<RawResponse>;

    /// `POST /activities/{activity}/signup?email=`
    async fn post_signup(&self, activity: &str, email: &str) -> Result<RawResponse>;

    /// `DELETE /activities/{activity}/signup?email=`
    async fn delete_signup(&self, activity: &str, email: &str) -> Result<RawResponse>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

async fn read(resp: Response) -> Result<RawResponse> {
    let status = resp.status();
    let body = resp.text().await?;
    Ok(RawResponse { status, body })
}

impl ActivitiesApi for HttpApi {
    async fn fetch_catalog(&self) -> Result<RawResponse> {
        let resp = Request::get(&activities_url(&self.base))
            .cache(RequestCache::NoStore)
            .send()
            .await?;
        read(resp).await
    }

    async fn post_signup(&self, activity: &str, email: &str) -> Result<RawResponse> {
        let resp = Request::post(&signup_url(&self.base, activity, email))
            .send()
            .await?;
        read(resp).await
    }

    async fn delete_signup(&self, activity: &str, email: &str) -> Result<RawResponse> {
        let resp = Request::delete(&signup_url(&self.base, activity, email))
            .send()
            .await?;
        read(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_url_encodes_name_and_email() {
        assert_eq!(
            signup_url("", "Chess Club", "p@x.com"),
            "/activities/Chess%20Club/signup?email=p%40x.com"
        );
    }

    #[test]
    fn signup_url_encodes_reserved_characters() {
        assert_eq!(
            signup_url("", "Art/Design & Co", "a+b@x.com"),
            "/activities/Art%2FDesign%20%26%20Co/signup?email=a%2Bb%40x.com"
        );
    }

    #[test]
    fn signup_url_keeps_uri_component_marks() {
        assert_eq!(
            signup_url("", "Drama (Advanced)", "o'brien@x.com"),
            "/activities/Drama%20(Advanced)/signup?email=o'brien%40x.com"
        );
        assert_eq!(encode_uri_component("Wow!*~-_."), "Wow!*~-_.");
    }

    #[test]
    fn non_ascii_is_utf8_percent_encoded() {
        assert_eq!(encode_uri_component("Café Ω"), "Caf%C3%A9%20%CE%A9");
        assert_eq!(encode_uri_component("50%"), "50%25");
    }

    #[test]
    fn base_is_joined_without_double_slash() {
        assert_eq!(activities_url(""), "/activities");
        assert_eq!(
            activities_url("https://school.example/api/"),
            "https://school.example/api/activities"
        );
        assert_eq!(
            signup_url("https://school.example/api/", "Gym", "g@x.com"),
            "https://school.example/api/activities/Gym/signup?email=g%40x.com"
        );
    }

    #[test]
    fn only_2xx_counts_as_ok() {
        assert!(RawResponse::new(200, "").ok());
        assert!(RawResponse::new(204, "").ok());
        assert!(!RawResponse::new(302, "").ok());
        assert!(!RawResponse::new(400, "").ok());
        assert!(!RawResponse::new(500, "").ok());
    }
}
