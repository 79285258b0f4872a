use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use server::startup::{build_app, build_state};
use tokio::net::TcpListener;
use uuid::Uuid;

struct TestApp {
    base_url: String,
    data_dir: std::path::PathBuf,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let data_dir = std::env::temp_dir().join(format!("payroll_e2e_{}", Uuid::new_v4()));
    let mut cfg = AppConfig::default();
    cfg.storage.data_file = data_dir.join("employees.json").to_string_lossy().into_owned();
    cfg.storage.public_dir = data_dir.join("public").to_string_lossy().into_owned();

    tokio::fs::create_dir_all(data_dir.join("public")).await?;
    tokio::fs::write(data_dir.join("public").join("style.css"), "body { margin: 0; }").await?;

    let app = build_app(build_state(&cfg), &cfg);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, data_dir })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("reqwest client")
}

#[tokio::test]
async fn e2e_health_and_static_assets() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?["status"], "ok");

    let res = client().get(format!("{}/style.css", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "body { margin: 0; }");

    let _ = tokio::fs::remove_dir_all(&app.data_dir).await;
    Ok(())
}

#[tokio::test]
async fn e2e_form_flow_persists_to_disk() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // first run: no data file yet
    let res = c.get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.contains("No employees yet."));

    let res = c
        .post(format!("{}/add", app.base_url))
        .form(&[("name", "Alice"), ("department", "Eng"), ("basicSalary", "1000")])
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::SEE_OTHER);

    let raw = tokio::fs::read_to_string(app.data_dir.join("employees.json")).await?;
    let stored: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(stored[0]["name"], "Alice");
    assert_eq!(stored[0]["basicSalary"], 1000.0);
    let id = stored[0]["id"].as_i64().expect("numeric id");

    let res = c
        .post(format!("{}/edit/{}", app.base_url, id))
        .form(&[("name", "Alice"), ("department", "Eng"), ("basicSalary", "1200")])
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::SEE_OTHER);

    let res = c.get(format!("{}/api/employees/{}", app.base_url, id)).send().await?;
    assert_eq!(res.json::<serde_json::Value>().await?["basicSalary"], 1200.0);

    let res = c.get(format!("{}/delete/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::SEE_OTHER);

    let res = c.get(format!("{}/api/employees", app.base_url)).send().await?;
    assert_eq!(res.json::<serde_json::Value>().await?, json!([]));

    let _ = tokio::fs::remove_dir_all(&app.data_dir).await;
    Ok(())
}
