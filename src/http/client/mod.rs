pub mod reqwest_client;

pub use reqwest_client::ApiClient;
