// HTTP surface tests using the router directly (no listener).

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;
use url::Url;

use digest_core::domains::digest::{DigestPipeline, DigestSettings, PromptStyle};
use digest_core::kernel::{MockPageFetcher, MockSummarizer};
use digest_core::server::{build_app, build_router, AppState};
use digest_core::Config;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_returns_ok() {
    let app = build_router(AppState { pipeline: None });

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_digest_without_api_key_answers_fixed_500() {
    let app = build_router(AppState { pipeline: None });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/resumir-hacienda")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_string(response).await,
        "La clave de API de OpenAI no está configurada."
    );
}

#[tokio::test]
async fn test_build_app_with_api_key_enables_digest_route() {
    let config = Config {
        port: 0,
        openai_api_key: Some("sk-test".to_string()),
        openai_model: "gpt-4o".to_string(),
        dof_base_url: "https://dof.test/".to_string(),
        departments: vec!["BANCO DE MEXICO".to_string()],
        fetch_timeout_secs: 1,
        openai_timeout_secs: 1,
    };

    let app = build_app(&config).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/resumir-hacienda")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // The index host does not resolve, so every department reports an
    // empty day, but the route is live instead of the fixed 500.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<h2>BANCO DE MEXICO</h2>"));
}

#[tokio::test]
async fn test_digest_renders_html_fragment() {
    let base_url = "https://dof.test/";
    let index = r#"
        <table>
            <tr><td class="subtitle_azul">BANCO DE MEXICO</td></tr>
            <tr><td><a href="nota_detalle.php?codigo=7">Valor de la unidad de inversión</a></td></tr>
        </table>
    "#;

    let fetcher = Arc::new(MockPageFetcher::new().with_page(base_url, index));
    let summarizer = Arc::new(
        MockSummarizer::new().with_response("- **Indicadores**\n- Se publicó el valor de la UDI.\n"),
    );

    let settings = DigestSettings {
        base_url: Url::parse(base_url).unwrap(),
        departments: vec!["BANCO DE MEXICO".to_string()],
        rate_department: "BANCO DE MEXICO".to_string(),
        prompt_style: PromptStyle::Grouped,
    };
    let state = AppState {
        pipeline: Some(Arc::new(DigestPipeline::new(fetcher, summarizer, settings))),
    };

    let response = build_router(state)
        .oneshot(
            Request::builder()
                .uri("/resumir-hacienda")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(response).await;
    assert!(body.contains("<h2>BANCO DE MEXICO</h2>"));
    assert!(body.contains("<p><strong>Indicadores</strong></p>"));
    assert!(body.contains("<ul><li>Se publicó el valor de la UDI.</li></ul>"));
}
