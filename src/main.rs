// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use songbook::application::bootstrap::bootstrap;
use songbook::application::services::{AppServices, Repositories};
use songbook::config::settings::Settings;
use songbook::infrastructure::database::connection::{self, redact_url};
use songbook::presentation::routes;
use songbook::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting songbook...");

    // 2. Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    info!("Configuration loaded");

    // 3. Connect to database
    let db = match connection::create_pool(&settings.database).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!(url = %redact_url(&settings.database.url), error = %e, "Database connection failed");
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Wire repositories and services
    let repos = Repositories::postgres(db.clone());
    let services = AppServices::from_settings(&repos, &settings)?;

    let report = bootstrap(&repos, &settings.bootstrap).await?;
    if let Some(key) = report.generated_api_key {
        // Printed once so the operator can configure OpenKJ; never logged.
        eprintln!("Generated OpenKJ API key for the bootstrap admin: {}", key);
    }

    // 5. Build router
    let app = routes::routes(services, &settings.cors);

    // 6. Start server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
