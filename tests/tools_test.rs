//! End-to-end tool behavior against a mock documentation site.

use std::time::Duration;

use serde_json::json;
use ui_layouts_docs::{
    Catalog, DocsFormat, DocsService, GetDocsArgs, MetaArgs, Options, SearchArgs, SourceArgs,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture() -> String {
    let path = format!("{}/tests/fixtures/accordion.html", env!("CARGO_MANIFEST_DIR"));
    match std::fs::read_to_string(&path) {
        Ok(html) => html,
        Err(err) => panic!("failed to read {path}: {err}"),
    }
}

fn service(server: &MockServer, path_prefix: Option<&str>) -> DocsService<'static> {
    let options = Options {
        base_url: server.uri(),
        path_prefix: path_prefix.map(ToString::to_string),
        ..Options::default()
    };
    match DocsService::new(Catalog::builtin(), options) {
        Ok(service) => service,
        Err(err) => panic!("service setup failed: {err}"),
    }
}

async fn serve_html(server: &MockServer, at: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

fn docs_args(key: &str, format: DocsFormat) -> GetDocsArgs {
    GetDocsArgs {
        key: Some(key.to_string()),
        format,
        ..GetDocsArgs::default()
    }
}

#[tokio::test]
async fn get_docs_text_has_header_and_body() {
    let server = MockServer::start().await;
    serve_html(&server, "/components/accordion", fixture()).await;

    let text = service(&server, None)
        .get_docs(&docs_args("accordion", DocsFormat::Text))
        .await
        .unwrap_or_default();

    let expected_header = format!(
        "# Docs\n- **name**: Accordion\n- **key**: `accordion`\n- **href**: `/components/accordion`\n- **url**: {}/components/accordion\n- **format**: text\n- **maxChars**: 8000\nAccordion - UI Layouts",
        server.uri()
    );
    assert!(text.starts_with(&expected_header), "got {text}");
    assert!(text.contains("Copyright ui-layouts"));
}

#[tokio::test]
async fn get_docs_snippet_uses_path_prefix() {
    let server = MockServer::start().await;
    serve_html(&server, "/docs/components/accordion", fixture()).await;

    let args = GetDocsArgs {
        path_prefix: Some("/docs/".to_string()),
        ..docs_args("accordion", DocsFormat::Snippet)
    };
    let text = service(&server, None).get_docs(&args).await.unwrap_or_default();

    assert!(text.contains(&format!("- **url**: {}/docs/components/accordion", server.uri())));
    assert!(text.contains("- **format**: snippet\n- **maxChars**: 8000\nAccordion\n"));
    assert!(!text.contains("Copyright"));
}

#[tokio::test]
async fn get_docs_falls_back_to_service_path_prefix() {
    let server = MockServer::start().await;
    serve_html(&server, "/v2/components/tabs", "<p>Tabs v2</p>".to_string()).await;

    let args = GetDocsArgs {
        href: Some("/components/tabs".to_string()),
        ..GetDocsArgs::default()
    };
    let text = service(&server, Some("v2")).get_docs(&args).await.unwrap_or_default();
    assert!(text.ends_with("- **maxChars**: 8000\nTabs v2"), "got {text}");
}

#[tokio::test]
async fn get_docs_raw_html_is_truncated_and_fenced() {
    let server = MockServer::start().await;
    let html = fixture();
    serve_html(&server, "/components/accordion", html.clone()).await;

    let args = GetDocsArgs {
        max_chars: Some(200),
        ..docs_args("accordion", DocsFormat::RawHtml)
    };
    let text = service(&server, None).get_docs(&args).await.unwrap_or_default();

    let head: String = html.chars().take(200).collect();
    assert!(text.ends_with(&format!("- **maxChars**: 200\n```html\n{head}\n```")));
}

#[tokio::test]
async fn get_docs_not_found() {
    let server = MockServer::start().await;
    let text = service(&server, None)
        .get_docs(&docs_args("nope", DocsFormat::Text))
        .await
        .unwrap_or_default();
    assert_eq!(text, "Not found (key=nope, href=-)");
}

#[tokio::test]
async fn get_docs_server_error_is_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let text = service(&server, None)
        .get_docs(&docs_args("accordion", DocsFormat::Text))
        .await
        .unwrap_or_default();
    assert_eq!(
        text,
        format!("⚠️ Failed to fetch docs from: {}/components/accordion", server.uri())
    );
}

#[tokio::test]
async fn get_docs_timeout_is_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>slow</p>")
                .set_delay(Duration::from_millis(3000)),
        )
        .mount(&server)
        .await;

    let args = GetDocsArgs {
        timeout_ms: Some(1000),
        ..docs_args("accordion", DocsFormat::Text)
    };
    let text = service(&server, None).get_docs(&args).await.unwrap_or_default();
    assert!(text.starts_with("⚠️ Failed to fetch docs from: "));
}

#[tokio::test]
async fn get_docs_rejects_out_of_range_arguments() {
    let server = MockServer::start().await;
    let service = service(&server, None);

    let small = GetDocsArgs {
        max_chars: Some(199),
        ..docs_args("accordion", DocsFormat::Text)
    };
    assert!(service.get_docs(&small).await.is_err());

    let slow = GetDocsArgs {
        timeout_ms: Some(20_001),
        ..docs_args("accordion", DocsFormat::Text)
    };
    assert!(service.get_docs(&slow).await.is_err());
}

#[tokio::test]
async fn get_component_meta_lists_present_fields() {
    let server = MockServer::start().await;
    serve_html(&server, "/components/accordion", fixture()).await;

    let args = MetaArgs {
        key: Some("accordion".to_string()),
        ..MetaArgs::default()
    };
    let text = service(&server, None)
        .get_component_meta(&args)
        .await
        .unwrap_or_default();

    assert!(text.starts_with("# Remote Metadata\n- **name**: Accordion\n"));
    assert!(text.contains("- **title**: Accordion - UI Layouts"));
    assert!(text.contains(&format!("- **image**: {}/og/accordion.png", server.uri())));
    assert!(text.contains("- **keywords**: accordion, collapse, disclosure"));
    assert!(text.contains("- **ui-layouts:component-names**: accordion, accordion-item"));
    assert!(text.contains(
        "- **ui-layouts:available-components**: Accordion, AccordionItem, AccordionTrigger"
    ));
    assert!(!text.contains("twitter:title"));
    assert!(!text.contains("creator"));
}

#[tokio::test]
async fn get_component_meta_failure_is_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let args = MetaArgs {
        href: Some("/components/tabs".to_string()),
        ..MetaArgs::default()
    };
    let text = service(&server, None)
        .get_component_meta(&args)
        .await
        .unwrap_or_default();
    assert_eq!(
        text,
        format!("⚠️ Failed to fetch metadata from: {}/components/tabs", server.uri())
    );
}

#[tokio::test]
async fn get_source_code_renders_first_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/liquid-glass-weather.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "liquid-glass-weather",
            "files": [
                { "path": "weather.tsx", "content": "export default function Weather() {}" },
                { "path": "other.tsx", "content": "ignored" }
            ]
        })))
        .mount(&server)
        .await;

    let args = SourceArgs {
        component_name: Some("liquid-glass-weather".to_string()),
        ..SourceArgs::default()
    };
    let text = service(&server, None)
        .get_source_code(&args)
        .await
        .unwrap_or_default();

    assert_eq!(
        text,
        format!(
            "# Source Code\n- **componentName**: `liquid-glass-weather`\n- **url**: {}/r/liquid-glass-weather.json\n- **maxChars**: 20000\n```tsx\nexport default function Weather() {{}}\n```",
            server.uri()
        )
    );
}

#[tokio::test]
async fn get_source_code_ignores_path_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/tabs.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"files": []})))
        .mount(&server)
        .await;

    let args = SourceArgs {
        component_name: Some("tabs".to_string()),
        ..SourceArgs::default()
    };
    let text = service(&server, Some("docs"))
        .get_source_code(&args)
        .await
        .unwrap_or_default();
    assert_eq!(text, format!("⚠️ No content found in {}/r/tabs.json", server.uri()));
}

#[tokio::test]
async fn get_source_code_fetch_failure_is_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let args = SourceArgs {
        component_name: Some("tabs".to_string()),
        ..SourceArgs::default()
    };
    let text = service(&server, None)
        .get_source_code(&args)
        .await
        .unwrap_or_default();
    assert_eq!(text, format!("⚠️ Failed to fetch from: {}/r/tabs.json", server.uri()));
}

#[tokio::test]
async fn get_source_code_null_body_is_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/tabs.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let args = SourceArgs {
        component_name: Some("tabs".to_string()),
        ..SourceArgs::default()
    };
    let text = service(&server, None)
        .get_source_code(&args)
        .await
        .unwrap_or_default();
    assert_eq!(text, format!("⚠️ Failed to fetch from: {}/r/tabs.json", server.uri()));
}

#[tokio::test]
async fn get_source_code_requires_name() {
    let server = MockServer::start().await;
    let service = service(&server, None);

    for component_name in [None, Some(String::new())] {
        let args = SourceArgs {
            component_name,
            ..SourceArgs::default()
        };
        let text = service.get_source_code(&args).await.unwrap_or_default();
        assert_eq!(text, "⚠️ Component name is required");
    }
}

#[tokio::test]
async fn search_components_renders_markdown() {
    let server = MockServer::start().await;
    let text = service(&server, None)
        .search_components(&SearchArgs {
            q: "Accordion".to_string(),
            limit: Some(1),
        })
        .unwrap_or_default();

    assert!(text.starts_with("# Search Results (1) for \"Accordion\"\n\n- **Accordion**  \n  - key: `accordion`"));
    assert!(text.ends_with("  - tags: collapse, disclosure, faq, interactive"));
}

#[tokio::test]
async fn service_exposes_effective_configuration() {
    let server = MockServer::start().await;
    let service = service(&server, Some("docs"));
    assert_eq!(service.options().base_url, server.uri());
    assert_eq!(service.options().path_prefix.as_deref(), Some("docs"));
    assert_eq!(service.options().timeout_ms, 7000);
    assert_eq!(service.catalog().len(), Catalog::builtin().len());
}

#[test]
fn tool_arguments_deserialize_from_wire_names() {
    let args: SourceArgs =
        serde_json::from_value(json!({"componentName": "tabs", "maxChars": 500, "timeoutMs": 2000}))
            .unwrap_or_default();
    assert_eq!(args.component_name.as_deref(), Some("tabs"));
    assert_eq!(args.max_chars, Some(500));
    assert_eq!(args.timeout_ms, Some(2000));

    let args: GetDocsArgs = serde_json::from_value(json!({"href": "/components/tabs"}))
        .unwrap_or_default();
    assert_eq!(args.format, DocsFormat::Text);
}
