//! Resolve-and-render pipeline behind `mctl app view`.
//!
//! classify -> plan -> fetch -> project -> render. Selector and format
//! problems are reported before anything is fetched, and nothing is written
//! until the whole pipeline has succeeded.

use std::io::Write;

use mctl_core::error::{CtlError, Result};

use crate::client::ApplicationSource;
use crate::identifier;
use crate::output::{self, OutputFormat};
use crate::project;
use crate::query::{self, QueryIntent};

/// A validated `app view` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequest {
    pub intent: QueryIntent,
    pub format: OutputFormat,
}

impl ViewRequest {
    /// Validate the output format and selectors and plan the lookup.
    pub fn new(args: &[String], all: bool, output_format: &str) -> Result<Self> {
        let format: OutputFormat = output_format.parse()?;
        let selector = identifier::classify(args);
        let intent = query::plan(args, &selector, all)?;
        tracing::debug!(?intent, %format, "planned application lookup");
        Ok(Self { intent, format })
    }
}

/// Fetch, project and render one lookup into `out`.
pub async fn run<W: Write + Send>(
    source: &dyn ApplicationSource,
    request: &ViewRequest,
    out: &mut W,
) -> Result<()> {
    let path = request.intent.request_path();
    let response = source.fetch(&path).await?;

    if !response.is_ok() {
        return Err(match request.intent {
            QueryIntent::ById(_) => CtlError::InvalidId {
                status_code: response.status,
            },
            _ => CtlError::UnexpectedStatus {
                url: source.url_for(&path),
                status_code: response.status,
            },
        });
    }

    let projection = project::project(&request.intent, &response.body)?;
    let rendered = output::render(&projection.to_value()?, request.format)?;

    if let Some(summary) = projection.summary() {
        write!(out, "{summary}")?;
    }
    writeln!(out, "{}", rendered.trim_end())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FetchResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const ID: &str = "3fae2b10-6c1d-4a8e-9f01-23456789abcd";

    /// Source that answers every fetch with a canned response and records paths.
    struct StaticSource {
        status: u16,
        body: String,
        paths: Mutex<Vec<String>>,
    }

    impl StaticSource {
        fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                paths: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ApplicationSource for StaticSource {
        fn url_for(&self, path: &str) -> String {
            format!("http://test{path}")
        }

        async fn fetch(&self, path: &str) -> Result<FetchResponse> {
            self.paths.lock().unwrap().push(path.to_string());
            Ok(FetchResponse {
                status: self.status,
                body: self.body.clone().into_bytes(),
            })
        }
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    async fn run_to_string(source: &StaticSource, request: &ViewRequest) -> Result<String> {
        let mut out = Vec::new();
        run(source, request, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_request_rejects_bad_format_first() {
        let err = ViewRequest::new(&[], false, "xml").unwrap_err();
        assert!(matches!(err, CtlError::InvalidOutputFormat(_)));
        let err = ViewRequest::new(&args(&["my-app"]), true, "xml").unwrap_err();
        assert!(matches!(err, CtlError::InvalidOutputFormat(_)));
    }

    #[test]
    fn test_request_selector_errors() {
        assert!(matches!(
            ViewRequest::new(&[], false, "yaml"),
            Err(CtlError::NoSelectorProvided)
        ));
        assert!(matches!(
            ViewRequest::new(&args(&["x"]), true, "json"),
            Err(CtlError::ConflictingSelectors)
        ));
    }

    #[tokio::test]
    async fn test_by_name_prints_summary_then_yaml() {
        let source = StaticSource::new(
            200,
            &format!(r#"{{"total_count":1,"applications":[{{"name":"my-app","id":"{ID}"}}]}}"#),
        );
        let request = ViewRequest::new(&args(&["my-app"]), false, "yaml").unwrap();
        let out = run_to_string(&source, &request).await.unwrap();

        assert!(out.starts_with("Name: my-app\n"));
        let (summary, structured) = out.split_once("#####################\n").unwrap();
        assert!(summary.contains(&format!("ID: {ID}")));
        let decoded: serde_json::Value = serde_yaml::from_str(structured).unwrap();
        assert_eq!(decoded["ID"], ID);
        assert_eq!(
            *source.paths.lock().unwrap(),
            vec!["/api/experimental/application?search=my-app".to_string()]
        );
    }

    #[tokio::test]
    async fn test_by_id_non_200_is_invalid_id() {
        let source = StaticSource::new(404, "not json at all");
        let request = ViewRequest::new(&args(&[ID]), false, "yaml").unwrap();
        let err = run_to_string(&source, &request).await.unwrap_err();
        assert!(matches!(err, CtlError::InvalidId { status_code: 404 }));
        assert!(err.to_string().contains("possible invalid ID"));
    }

    #[tokio::test]
    async fn test_search_non_200_is_unexpected_status() {
        let source = StaticSource::new(500, "");
        let request = ViewRequest::new(&[], true, "json").unwrap();
        let err = run_to_string(&source, &request).await.unwrap_err();
        match err {
            CtlError::UnexpectedStatus { url, status_code } => {
                assert_eq!(status_code, 500);
                assert_eq!(url, "http://test/api/experimental/application?page_size=10000");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_all_json_keeps_only_applications() {
        let source = StaticSource::new(
            200,
            &format!(
                r#"{{"page":0,"page_size":10000,"total_count":1,"applications":[{{"name":"web","id":"{ID}"}}]}}"#
            ),
        );
        let request = ViewRequest::new(&[], true, "json").unwrap();
        let out = run_to_string(&source, &request).await.unwrap();

        let decoded: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(decoded.as_object().unwrap().len(), 1);
        assert_eq!(decoded["applications"][0]["name"], "web");
        assert!(out.starts_with("{\n  \"applications\""));
    }

    #[tokio::test]
    async fn test_not_found_writes_nothing() {
        let source = StaticSource::new(
            200,
            &format!(r#"{{"total_count":1,"applications":[{{"name":"other","id":"{ID}"}}]}}"#),
        );
        let request = ViewRequest::new(&args(&["my-app"]), false, "yaml").unwrap();
        let mut out = Vec::new();
        let err = run(&source, &request, &mut out).await.unwrap_err();
        assert!(matches!(err, CtlError::NotFound(_)));
        assert!(out.is_empty());
    }
}
