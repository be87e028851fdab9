use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};
use site_cms_api::{build_app, AppConfig, AppState};
use tempfile::TempDir;

async fn spawn_server(config: AppConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_app(AppState::new(config));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn browser_style_upload_round_trip() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::for_root(dir.path());
    let base = spawn_server(config.clone()).await;
    let client = reqwest::Client::new();

    let payload: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
    let form = Form::new().text("alt", "gradient").part(
        "file",
        Part::bytes(payload.clone())
            .file_name("gradient.avif")
            .mime_str("image/avif")
            .unwrap(),
    );

    let res = client
        .post(format!("{base}/cms/images"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "filename": "gradient.avif" }));
    assert_eq!(std::fs::read(config.images_dir.join("gradient.avif")).unwrap(), payload);

    let listed: Value = client
        .get(format!("{base}/cms/images"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, json!(["gradient.avif"]));

    let served = client
        .get(format!("{base}/images/gradient.avif"))
        .send()
        .await
        .unwrap();
    assert_eq!(served.status(), 200);
    assert_eq!(&served.bytes().await.unwrap()[..], payload.as_slice());
}

#[tokio::test]
async fn post_lifecycle_over_http() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::for_root(dir.path());
    std::fs::create_dir_all(config.posts_path.parent().unwrap()).unwrap();
    std::fs::write(&config.posts_path, "[]").unwrap();
    let base = spawn_server(config.clone()).await;
    let client = reqwest::Client::new();

    let post = json!({
        "slug": "playbook-1",
        "title": "Playbook one",
        "description": "Steps",
        "category": "Playbook",
        "publishedAt": "2025-01-02",
        "readTimeMinutes": 3,
        "ctaLabel": "Start free",
        "ctaHref": "/register",
        "sections": []
    });

    let res = client
        .post(format!("{base}/cms/posts"))
        .json(&post)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);

    let res = client
        .delete(format!("{base}/cms/posts/playbook-1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({ "ok": true }));

    let res = client
        .delete(format!("{base}/cms/posts/playbook-1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(std::fs::read_to_string(&config.posts_path).unwrap(), "[]");
}
