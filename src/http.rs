use anyhow::Context as _;

pub fn new_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// GETs `url` and deserializes the json body
///
/// A non-success status is an error carrying the status and the body text
pub async fn get_json<'a, T, Q>(
    client: &reqwest::Client,
    url: &'a str,
    query: &'a Q,
    headers: &[(&'static str, &str)],
) -> anyhow::Result<T>
where
    for<'de> T: serde::Deserialize<'de>,
    Q: serde::Serialize + 'a,
{
    let mut req = client.get(url).query(query);
    for &(k, v) in headers {
        req = req.header(k, v);
    }

    let resp = client
        .execute(req.build()?)
        .await
        .with_context(|| format!("cannot get url '{}'", url))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp
            .text()
            .await
            .with_context(|| format!("cannot get body for '{}'", url))?;
        anyhow::bail!("api error {} for '{}': {}", status, url, body.trim())
    }

    resp.json()
        .await
        .with_context(|| format!("cannot get json for '{}'", url))
}
