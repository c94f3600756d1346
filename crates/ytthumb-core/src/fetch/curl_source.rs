//! libcurl-backed ImageSource.

use std::str;
use std::time::Duration;

use super::{check_status, parse, FetchError, ImageHead, ImageSource};
use crate::config::ThumbConfig;

/// Blocking HTTP client for thumbnail addresses. One easy handle per call.
#[derive(Debug, Clone)]
pub struct CurlImageSource {
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for CurlImageSource {
    fn default() -> Self {
        Self::from_config(&ThumbConfig::default())
    }
}

impl CurlImageSource {
    pub fn from_config(cfg: &ThumbConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }

    fn easy(&self, address: &str) -> Result<curl::easy::Easy, FetchError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(address)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }
        Ok(easy)
    }
}

impl ImageSource for CurlImageSource {
    fn probe(&self, address: &str) -> Result<ImageHead, FetchError> {
        let mut headers: Vec<String> = Vec::new();
        let mut easy = self.easy(address)?;
        easy.nobody(true)?; // HEAD request

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        tracing::debug!(address, code, "probe");
        check_status(code)?;
        Ok(parse::parse_headers(&headers))
    }

    fn fetch(&self, address: &str) -> Result<Vec<u8>, FetchError> {
        let mut body: Vec<u8> = Vec::new();
        let mut easy = self.easy(address)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        tracing::debug!(address, code, bytes = body.len(), "fetch");
        check_status(code)?;
        Ok(body)
    }
}
