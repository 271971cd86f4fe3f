use once_cell::sync::Lazy;
use url::Url;

pub static BASE_URL_ENV: &str = "SCC_BASE_URL";
pub static DEFAULT_BASE_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse("https://us-south.compliance.cloud.ibm.com")
        .expect("DEFAULT_BASE_URL")
});

pub const USER_AGENT: &str =
    concat!("scc-client/", env!("CARGO_PKG_VERSION"));

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_us_south() {
        assert_eq!(
            DEFAULT_BASE_URL.as_str(),
            "https://us-south.compliance.cloud.ibm.com/"
        );
    }
}
