use library_catalog::{
    api::{handlers::AppState, router::create_router},
    application::catalog::{Catalog, CatalogError, sample_catalog},
    domain::{ItemId, MemberId},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // `demo` を指定した場合はサンプルシナリオをコンソールに出力して終了
    if std::env::args().nth(1).as_deref() == Some("demo") {
        run_demo(sample_catalog());
        return;
    }

    // Create application state
    let app_state = Arc::new(AppState::new(sample_catalog()));

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

/// サンプルデータでの貸出・返却の流れを出力する
fn run_demo(mut catalog: Catalog) {
    let alice = MemberId::from("M1001");
    let bob = MemberId::from("M1002");
    let oop_basics = ItemId::from("B001");

    print_outcome(catalog.borrow_item(&alice, &oop_basics).map(|e| e.message()));
    print_outcome(
        catalog
            .borrow_item(&bob, &ItemId::from("A001"))
            .map(|e| e.message()),
    );
    print_outcome(catalog.borrow_item(&alice, &oop_basics).map(|e| e.message()));

    println!("\nAlice's borrowed items:");
    println!("{}", catalog.list_borrowed_items(&alice).unwrap_or_default());

    println!();
    print_outcome(catalog.return_item(&alice, &oop_basics).map(|e| e.message()));

    println!("\nLibrary summary:");
    println!("{}", catalog.library_summary());
}

fn print_outcome(outcome: Result<String, CatalogError>) {
    match outcome {
        Ok(message) => println!("{}", message),
        Err(e) => println!("{}", e),
    }
}
