use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Content type sent on the wire. The canonical string signs the bare
/// `application/json` literal instead, per the SolisCloud API contract.
pub static CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Headers for one signed API call; lives only for the duration of the request.
#[derive(Debug)]
pub struct SignedRequest {
    pub content_md5: String,
    pub date: String,
    pub authorization: String,
}

pub fn sign(method: &str, path: &str, body: &str, key: &str, secret: &str) -> SignedRequest {
    let content_md5 = content_digest(body);
    let date = gmt_date();
    sign_with_date(method, path, &content_md5, &date, key, secret)
}

/// base64 of the raw MD5 of the body, for the `Content-MD5` header.
pub fn content_digest(body: &str) -> String {
    BASE64.encode(Md5::digest(body.as_bytes()))
}

/// RFC-1123 timestamp in GMT, no local offset.
pub fn gmt_date() -> String {
    chrono::Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

fn string_to_sign(method: &str, content_md5: &str, date: &str, path: &str) -> String {
    format!(
        "{}\n{}\napplication/json\n{}\n{}",
        method, content_md5, date, path
    )
}

pub fn sign_with_date(
    method: &str,
    path: &str,
    content_md5: &str,
    date: &str,
    key: &str,
    secret: &str,
) -> SignedRequest {
    let canonical = string_to_sign(method, content_md5, date, path);
    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).expect("hmac accepts any key length");
    mac.update(canonical.as_bytes());
    let signature = BASE64.encode(mac.finalize().into_bytes());

    SignedRequest {
        content_md5: content_md5.to_string(),
        date: date.to_string(),
        authorization: format!("API {}:{}", key, signature),
    }
}
