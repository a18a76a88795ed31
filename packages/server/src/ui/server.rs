//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use huddle_shared::time::{Clock, SystemClock};
use tokio::{net::TcpListener, sync::Mutex};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    domain::{ChatRoom, MessagePusher},
    infrastructure::message_pusher::WebSocketMessagePusher,
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, DispatchEventUseCase, GetMessagesUseCase,
        GetTypingUsersUseCase, GetUsersUseCase,
    },
};

use super::{
    handler::{get_messages, get_typing_users, get_users, health_check, root, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket chat server
///
/// # Example
///
/// ```ignore
/// let server = Server::in_memory(100, Arc::new(SystemClock));
/// server.run("127.0.0.1:5000").await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
    /// Origin allowed by CORS; `None` disables the CORS layer
    client_origin: Option<String>,
}

impl Server {
    /// Create a server from already wired use cases
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
            client_origin: None,
        }
    }

    /// Wire an in-memory chat room and WebSocket pusher into a server
    ///
    /// # Arguments
    ///
    /// * `history_capacity` - Number of broadcast messages kept in history
    /// * `clock` - Source of message timestamps
    pub fn in_memory(history_capacity: usize, clock: Arc<dyn Clock>) -> Self {
        // 1. Chat room state (single writer behind one mutex)
        let room = Arc::new(Mutex::new(ChatRoom::with_history_capacity(
            history_capacity,
        )));

        // 2. MessagePusher (WebSocket implementation)
        let message_pusher: Arc<dyn MessagePusher> = Arc::new(WebSocketMessagePusher::default());

        // 3. UseCases
        Self::new(AppState {
            connect_client_usecase: Arc::new(ConnectClientUseCase::new(message_pusher.clone())),
            dispatch_event_usecase: Arc::new(DispatchEventUseCase::new(
                room.clone(),
                message_pusher.clone(),
                clock.clone(),
            )),
            disconnect_client_usecase: Arc::new(DisconnectClientUseCase::new(
                room.clone(),
                message_pusher,
                clock,
            )),
            get_messages_usecase: Arc::new(GetMessagesUseCase::new(room.clone())),
            get_users_usecase: Arc::new(GetUsersUseCase::new(room.clone())),
            get_typing_users_usecase: Arc::new(GetTypingUsersUseCase::new(room)),
        })
    }

    /// Same as [`Server::in_memory`] with the system clock
    pub fn with_history_capacity(history_capacity: usize) -> Self {
        Self::in_memory(history_capacity, Arc::new(SystemClock))
    }

    /// Allow browser requests from `origin`
    pub fn with_client_origin(mut self, origin: impl Into<String>) -> Self {
        self.client_origin = Some(origin.into());
        self
    }

    /// Build the axum router
    ///
    /// # Errors
    ///
    /// Returns an error if the configured client origin is not a valid header value.
    pub fn router(&self) -> Result<Router, Box<dyn std::error::Error + Send + Sync>> {
        let mut app = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/", get(root))
            .route("/api/health", get(health_check))
            .route("/api/messages", get(get_messages))
            .route("/api/users", get(get_users))
            .route("/api/typing", get(get_typing_users))
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http());

        if let Some(origin) = &self.client_origin {
            let cors = CorsLayer::new()
                .allow_origin(origin.parse::<HeaderValue>()?)
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true);
            app = app.layer(cors);
        }

        Ok(app)
    }

    /// Run the WebSocket chat server
    ///
    /// # Arguments
    ///
    /// * `bind_addr` - The address to bind to (e.g., "127.0.0.1:5000")
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, bind_addr: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let listener = TcpListener::bind(bind_addr).await?;
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        self.serve(listener).await
    }

    /// Serve on an already bound listener until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the router cannot be built or serving fails.
    pub async fn serve(
        self,
        listener: TcpListener,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let app = self.router()?;

        tracing::info!("Chat server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
