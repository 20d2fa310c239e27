//! Built-in HTTP download

use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use wanxiang_application::InstallerError;

/// Tool name reported when the built-in client fails
pub(crate) const DOWNLOAD_CLIENT: &str = "http download";

/// Stream `url` into `dest` with `reqwest`, replacing any existing file.
pub(crate) async fn download_to(
    client: &reqwest::Client,
    url: &str,
    dest: &Path,
) -> Result<(), InstallerError> {
    let invocation = |message: String| InstallerError::ToolInvocation {
        tool: DOWNLOAD_CLIENT.to_string(),
        message,
    };

    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| invocation(format!("Failed to fetch {}: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(invocation(format!(
            "HTTP error: {} {} from {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            url
        )));
    }

    let mut file = tokio::fs::File::create(dest)
        .await
        .map_err(|e| InstallerError::io(dest, e))?;
    let mut written: u64 = 0;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| invocation(format!("Failed to read response body: {}", e)))?
    {
        file.write_all(&chunk)
            .await
            .map_err(|e| InstallerError::io(dest, e))?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(|e| InstallerError::io(dest, e))?;

    debug!("Downloaded {} bytes to {}", written, dest.display());
    Ok(())
}
