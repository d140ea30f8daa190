//! Unit tests for the github_client crate.

use super::*; // Import items from lib.rs
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate}; // For constructing mock bodies

// --- Test Constants ---
const TEST_TOKEN: &str = "ghp_testtoken1234567890";

fn client_for(mock_server: &MockServer) -> GitHubClient {
    let octocrab = octocrab::Octocrab::builder()
        .base_uri(mock_server.uri())
        .unwrap()
        .personal_token(TEST_TOKEN.to_string())
        .build()
        .unwrap();
    GitHubClient { client: octocrab }
}

#[tokio::test]
async fn test_delete_branch_success_on_204() {
    let mock_server = MockServer::start().await;
    let owner = "test-owner";
    let repo = "test-repo";
    let branch = "stale-branch";

    Mock::given(method("DELETE"))
        .and(path(format!("/repos/{owner}/{repo}/git/refs/heads/{branch}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.delete_branch(owner, repo, branch).await;

    if let Err(e) = &result {
        eprintln!("delete_branch error: {e:?}");
    }
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_branch_keeps_slashes_in_ref_path() {
    // Branch names routinely contain slashes; the ref path nests them under heads/.
    let mock_server = MockServer::start().await;
    let owner = "test-owner";
    let repo = "test-repo";
    let branch = "feature/stale-fix";

    Mock::given(method("DELETE"))
        .and(path(format!("/repos/{owner}/{repo}/git/refs/heads/{branch}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.delete_branch(owner, repo, branch).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_branch_fails_on_404() {
    let mock_server = MockServer::start().await;
    let owner = "test-owner";
    let repo = "test-repo";
    let branch = "already-gone";

    Mock::given(method("DELETE"))
        .and(path(format!("/repos/{owner}/{repo}/git/refs/heads/{branch}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest/git/refs#delete-a-reference"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.delete_branch(owner, repo, branch).await;

    assert!(matches!(result, Err(Error::InvalidResponse)));
}

#[tokio::test]
async fn test_delete_branch_fails_on_403() {
    let mock_server = MockServer::start().await;
    let owner = "test-owner";
    let repo = "test-repo";
    let branch = "protected-branch";

    Mock::given(method("DELETE"))
        .and(path(format!("/repos/{owner}/{repo}/git/refs/heads/{branch}")))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "Must have admin rights to Repository.",
            "documentation_url": "https://docs.github.com/rest/git/refs#delete-a-reference"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.delete_branch(owner, repo, branch).await;

    assert!(matches!(result, Err(Error::InvalidResponse)));
}

#[tokio::test]
async fn test_delete_branch_fails_on_server_error() {
    let mock_server = MockServer::start().await;
    let owner = "test-owner";
    let repo = "test-repo";
    let branch = "unlucky-branch";

    Mock::given(method("DELETE"))
        .and(path(format!("/repos/{owner}/{repo}/git/refs/heads/{branch}")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Internal Server Error"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.delete_branch(owner, repo, branch).await;

    assert!(matches!(result, Err(Error::InvalidResponse)));
}

#[tokio::test]
async fn test_create_token_client() {
    let result = create_token_client(TEST_TOKEN);
    assert!(result.is_ok());
}
