use anyhow::{Context, Result};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

/// A `web` server process on a random local port.
///
/// Runs in local mode against a backend URL nothing listens on, so pages
/// render without a live API.
pub struct TestServer {
    url: String,
    process: Option<Child>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let port = get_random_port()?;
        let unused_api_port = get_random_port()?;

        let process = Command::new("cargo")
            .args(["run", "--package", "web", "--features", "server"])
            .env("APP_MODE", "local")
            .env("PORT", port.to_string())
            .env("IP", "127.0.0.1")
            .env(
                "INTERNWAY_API_URL",
                format!("http://127.0.0.1:{unused_api_port}/api"),
            )
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("failed to start web server")?;

        let url = format!("http://localhost:{port}");
        let server = Self {
            url,
            process: Some(process),
        };

        wait_for_server(&server.url).await?;
        Ok(server)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
        }
    }
}

fn get_random_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    Ok(port)
}

async fn wait_for_server(url: &str) -> Result<()> {
    // Up to 60 seconds: the first run includes compilation.
    for i in 0..600 {
        if let Ok(response) = reqwest::get(url).await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;

        if i > 0 && i % 50 == 0 {
            eprintln!("Still waiting for server... ({}s)", i / 10);
        }
    }
    anyhow::bail!("Server did not start in time (waited 60s)")
}
