pub mod fixtures;
pub mod mock_github_server;
pub mod stub_github;
