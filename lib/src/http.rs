//! The requests of the [HTTP API](https://www.dropbox.com/developers/documentation/http/documentation)
//!
//! RPC endpoints receive their arguments as a JSON body while content endpoints
//! receive them in the `Dropbox-API-Arg` header.

use crate::Error;

const API_ARG_HEADER: &str = "Dropbox-API-Arg";
const API_RESULT_HEADER: &str = "Dropbox-API-Result";

async fn read_response<T: serde::de::DeserializeOwned>(res: reqwest::Response) -> Result<T, Error> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    if status.is_success() {
        res.json::<T>().await.map_err(Error::from)
    } else {
        let body = res.text().await?;
        Err(Error::from_response(status.as_u16(), &body))
    }
}

/// Serializes the arguments so that they can be sent in a header.
///
/// Header values must be ASCII, every other character is escaped.
fn header_arg<P: serde::Serialize>(params: &P) -> Result<String, Error> {
    let json = serde_json::to_string(params)?;
    let mut result = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            result.push(c);
        } else {
            let mut buffer = [0u16; 2];
            for unit in c.encode_utf16(&mut buffer) {
                result.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    Ok(result)
}

impl crate::Client {
    fn build_url(base: &str, method: &str) -> String {
        format!("{base}/{method}")
    }

    #[tracing::instrument(name = "rpc", skip(self, params))]
    pub(crate) async fn rpc_request<T: serde::de::DeserializeOwned, P: serde::Serialize>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<T, Error> {
        let uri = Self::build_url(&self.api_url, method);
        tracing::debug!("calling {uri}");
        let res = self
            .inner
            .post(uri)
            .bearer_auth(self.credentials.token())
            .json(params)
            .send()
            .await?;
        read_response(res).await
    }

    #[tracing::instrument(name = "upload", skip(self, params, payload))]
    pub(crate) async fn upload_request<T: serde::de::DeserializeOwned, P: serde::Serialize>(
        &self,
        method: &str,
        params: &P,
        payload: Vec<u8>,
    ) -> Result<T, Error> {
        let uri = Self::build_url(&self.content_url, method);
        tracing::debug!("sending {} bytes to {uri}", payload.len());
        let res = self
            .inner
            .post(uri)
            .bearer_auth(self.credentials.token())
            .header(API_ARG_HEADER, header_arg(params)?)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(payload)
            .send()
            .await?;
        read_response(res).await
    }

    /// Sends a content request and returns the metadata along with the response to read the content from.
    #[tracing::instrument(name = "download", skip(self, params))]
    pub(crate) async fn download_request<T: serde::de::DeserializeOwned, P: serde::Serialize>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<(T, reqwest::Response), Error> {
        let uri = Self::build_url(&self.content_url, method);
        tracing::debug!("calling {uri}");
        let res = self
            .inner
            .post(uri)
            .bearer_auth(self.credentials.token())
            .header(API_ARG_HEADER, header_arg(params)?)
            .send()
            .await?;
        let status = res.status();
        tracing::debug!("responded with status {status:?}");
        if !status.is_success() {
            let body = res.text().await?;
            return Err(Error::from_response(status.as_u16(), &body));
        }
        let metadata = res
            .headers()
            .get(API_RESULT_HEADER)
            .map(|value| value.as_bytes())
            .unwrap_or_default();
        let metadata = serde_json::from_slice(metadata)?;
        Ok((metadata, res))
    }
}
