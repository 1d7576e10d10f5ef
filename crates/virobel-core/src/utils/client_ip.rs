/// Client identity resolution from proxy headers
use crate::constants::UNKNOWN_CLIENT_IP;
use http::HeaderMap;

/// Headers consulted for the client address, in priority order
const FORWARDED_FOR: &str = "x-forwarded-for";
const REAL_IP: &str = "x-real-ip";
const CF_CONNECTING_IP: &str = "cf-connecting-ip";

/// Resolves the client address used as the rate-limit key.
///
/// Uses the first entry of `x-forwarded-for`, then `x-real-ip`, then
/// `cf-connecting-ip`. Empty or non-UTF-8 values are skipped. Falls back to
/// `"unknown"`, which makes all such clients share one bucket.
pub fn client_ip(headers: &HeaderMap) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    header(FORWARDED_FOR)
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| header(REAL_IP))
        .or_else(|| header(CF_CONNECTING_IP))
        .unwrap_or(UNKNOWN_CLIENT_IP)
        .to_string()
}
