use scribe_api::server::{self, Service};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run(Service::Blogs).await
}
