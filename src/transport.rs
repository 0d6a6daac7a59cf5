//! HTTP implementations of the search endpoint and export navigator.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde::Serialize;
use tracing::debug;

use crate::export::{ExportError, ExportForm, Navigator};
use crate::search::{SearchEndpoint, SearchError, SearchQuery};

/// Join a configured base url and resource path.
pub fn resource_url(base_url: &str, path: &str) -> Result<Url, SearchError> {
	let invalid = |reason: String| SearchError::InvalidUrl {
		url: format!("{base_url}{path}"),
		reason,
	};
	let base = Url::parse(base_url).map_err(|err| invalid(err.to_string()))?;
	base.join(path).map_err(|err| invalid(err.to_string()))
}

fn build_client(timeout: Duration) -> Result<Client, SearchError> {
	Client::builder()
		.timeout(timeout)
		.build()
		.map_err(|err| SearchError::Transport(err.to_string()))
}

/// Posts search queries to the partial-results endpoint.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
	client: Client,
	url: Url,
}

impl HttpEndpoint {
	pub fn new(base_url: &str, search_path: &str, timeout: Duration) -> Result<Self, SearchError> {
		Ok(Self {
			client: build_client(timeout)?,
			url: resource_url(base_url, search_path)?,
		})
	}

	#[must_use]
	pub fn url(&self) -> &Url {
		&self.url
	}
}

impl SearchEndpoint for HttpEndpoint {
	fn fetch(&self, query: &SearchQuery) -> Result<String, SearchError> {
		debug!(url = %self.url, page = query.page, "posting search query");
		let response = self
			.client
			.post(self.url.clone())
			.form(&query.form_pairs())
			.send()
			.map_err(|err| SearchError::Transport(err.to_string()))?;

		let response = check_status(response).map_err(|status| SearchError::Status { status })?;
		response
			.text()
			.map_err(|err| SearchError::Transport(err.to_string()))
	}
}

/// Page reached after submitting the export form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationPage {
	pub url: String,
	pub status: u16,
	pub body: String,
}

/// Submits the export form with a plain form post and follows redirects.
#[derive(Debug, Clone)]
pub struct HttpNavigator {
	client: Client,
	url: Url,
}

impl HttpNavigator {
	pub fn new(base_url: &str, export_path: &str, timeout: Duration) -> Result<Self, SearchError> {
		Ok(Self {
			client: build_client(timeout)?,
			url: resource_url(base_url, export_path)?,
		})
	}
}

impl Navigator for HttpNavigator {
	type Output = NavigationPage;

	fn submit(&mut self, form: &ExportForm) -> Result<NavigationPage, ExportError> {
		debug!(url = %self.url, ids = %form.ids, "submitting export form");
		let response = self
			.client
			.post(self.url.clone())
			.form(&form.form_pairs()[..])
			.send()
			.map_err(|err| ExportError::Transport(err.to_string()))?;

		let response = check_status(response).map_err(|status| ExportError::Status { status })?;
		let url = response.url().to_string();
		let status = response.status().as_u16();
		let body = response
			.text()
			.map_err(|err| ExportError::Transport(err.to_string()))?;
		Ok(NavigationPage { url, status, body })
	}
}

fn check_status(response: Response) -> Result<Response, u16> {
	let status = response.status();
	if status.is_success() {
		Ok(response)
	} else {
		Err(status.as_u16())
	}
}
