use crate::cart::{self, CartHandle, CheckoutContext};
use crate::catalog::{Catalog, ProductEditor};
use crate::clients::{AnalyticsClient, AuthClient, CustomerClient, ProductClient, SalesClient};
use crate::config::PosConfig;
use crate::gateway::{ApiClient, ApiError, HttpTransport, Transport};
use crate::reports::{AdminOverview, DashboardSummary};
use crate::session::{AuthSession, SessionContext, SessionState};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Everything a terminal needs, wired together.
///
/// All clients share one [`ApiClient`], and with it one transport and one
/// [`SessionContext`]. The cart engine runs in its own task until
/// [`shutdown`](PosSystem::shutdown).
///
/// ```ignore
/// let system = PosSystem::new(&PosConfig::from_env()?)?;
/// system.start().await;
///
/// system.cart.add_item(product).await?;
/// system.cart.checkout(Some("Jane")).await?;
///
/// system.shutdown().await?;
/// ```
pub struct PosSystem {
    pub session: AuthSession,
    pub catalog: Catalog,
    pub editor: ProductEditor,
    pub cart: CartHandle,
    pub sales: SalesClient,
    pub customers: CustomerClient,
    pub analytics: AnalyticsClient,
    top_selling_limit: u32,
    handles: Vec<JoinHandle<()>>,
}

impl PosSystem {
    /// Builds the system over HTTP. Must be called inside a Tokio runtime.
    pub fn new(config: &PosConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(&config.api_base_url, config.request_timeout)?;
        info!(base_url = transport.base_url(), "Using backend");
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Builds the system over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>, config: &PosConfig) -> Self {
        let context = SessionContext::new();
        let api = ApiClient::new(transport, context.clone());

        let session = AuthSession::new(AuthClient::new(api.clone()), context.clone());
        let catalog = Catalog::new(ProductClient::new(api.clone()));
        let editor = ProductEditor::new(catalog.clone(), context);
        let sales = SalesClient::new(api.clone());
        let customers = CustomerClient::new(api.clone());
        let analytics = AnalyticsClient::new(api);

        let (engine, cart) = cart::new(config.cart_buffer);
        let engine_handle = tokio::spawn(engine.run(CheckoutContext {
            sales: sales.clone(),
            catalog: catalog.clone(),
        }));

        Self {
            session,
            catalog,
            editor,
            cart,
            sales,
            customers,
            analytics,
            top_selling_limit: config.top_selling_limit,
            handles: vec![engine_handle],
        }
    }

    /// Resolves the session and, when signed in, loads the catalog.
    pub async fn start(&self) -> SessionState {
        let state = self.session.init().await;
        if state.is_authenticated() {
            if let Err(e) = self.catalog.refresh().await {
                warn!(error = %e, "Initial catalog load failed");
            }
        }
        state
    }

    pub async fn dashboard(&self) -> Result<DashboardSummary, ApiError> {
        DashboardSummary::load(&self.analytics, self.top_selling_limit).await
    }

    pub async fn admin_overview(&self) -> Result<AdminOverview, ApiError> {
        AdminOverview::load(self.session.context(), &self.customers, &self.sales).await
    }

    /// Stops the cart engine, letting any in-flight checkout finish first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down terminal...");

        // Dropping the last handle closes the engine's channel.
        drop(self.cart);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Engine task failed: {:?}", e);
                return Err(format!("Engine task failed: {:?}", e));
            }
        }

        info!("Terminal shutdown complete.");
        Ok(())
    }
}
