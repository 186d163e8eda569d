use super::*;

impl RemoteClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("account not found: {}", self.config.account);
        }
        if resp.status() == reqwest::StatusCode::FORBIDDEN {
            anyhow::bail!("forbidden (the API rate limit may be exhausted)");
        }
        resp.error_for_status()
            .with_context(|| format!("{} status", label))
    }

    pub(super) fn get_json_bytes(&self, url: &str, label: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .with_context(|| format!("{} send", label))?;
        let bytes = self
            .ensure_ok(resp, label)?
            .bytes()
            .with_context(|| format!("{} body", label))?;
        Ok(bytes.to_vec())
    }
}
