use crate::{
    error::GameError,
    game::{GameEvent, GameSession},
    websocket::messages::{ClientMessage, ServerMessage},
    AppState,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use rand::rngs::StdRng;
use std::{sync::Arc, time::Duration};
use tokio::sync::mpsc;
use uuid::Uuid;

/// WebSocket upgrade handler
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection. Each connection plays its own
/// game; the session lives in `state.sessions` until the socket closes.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = Uuid::new_v4();
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);
    let mut rng = state.new_rng();

    tracing::info!("WebSocket connection established: {}", connection_id);

    if let Err(e) = start_new_game(&state, connection_id, None, &mut rng, &tx).await {
        tracing::error!("Failed to start initial game: {}", e);
        let _ = tx
            .send(ServerMessage::Error {
                message: e.to_string(),
            })
            .await;
    }

    // Spawn a task to send messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // Handle incoming messages from the client
    let state_for_recv = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => {
                        if let Err(e) = handle_client_message(
                            client_msg,
                            &state_for_recv,
                            connection_id,
                            &mut rng,
                            &tx,
                        )
                        .await
                        {
                            tracing::error!("Error handling message: {}", e);
                            let error_msg = ServerMessage::Error {
                                message: e.to_string(),
                            };
                            let _ = tx.send(error_msg).await;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse message: {}", e);
                        let error_msg = ServerMessage::Error {
                            message: format!("Invalid message format: {}", e),
                        };
                        let _ = tx.send(error_msg).await;
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Client disconnected: {}", connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
        }
        _ = (&mut recv_task) => {
            send_task.abort();
        }
    }

    state.sessions.remove(&connection_id);

    tracing::info!("WebSocket connection closed: {}", connection_id);
}

/// Handle individual client messages
pub(crate) async fn handle_client_message(
    msg: ClientMessage,
    state: &Arc<AppState>,
    connection_id: Uuid,
    rng: &mut StdRng,
    tx: &mpsc::Sender<ServerMessage>,
) -> anyhow::Result<()> {
    match msg {
        ClientMessage::NewGame { category } => {
            start_new_game(state, connection_id, category.as_deref(), rng, tx).await?;
        }
        ClientMessage::GestureStart { position } => {
            let (game_id, events) = with_session(state, connection_id, |s| s.gesture_start(position))?;
            dispatch_events(state, connection_id, game_id, events, tx).await?;
        }
        ClientMessage::GestureExtend { position } => {
            let (game_id, events) = with_session(state, connection_id, |s| s.gesture_extend(position))?;
            dispatch_events(state, connection_id, game_id, events, tx).await?;
        }
        ClientMessage::GestureEnd => {
            let (game_id, events) = with_session(state, connection_id, |s| s.gesture_end())?;
            dispatch_events(state, connection_id, game_id, events, tx).await?;
        }
        ClientMessage::GestureCancel => {
            tracing::debug!("Gesture abandoned on {}", connection_id);
            let (game_id, events) = with_session(state, connection_id, |s| s.gesture_end())?;
            dispatch_events(state, connection_id, game_id, events, tx).await?;
        }
        ClientMessage::RequestHint => {
            let (game_id, hint) = with_session(state, connection_id, |s| s.request_hint())?;
            // No hint once every word is found
            if let Some(event) = hint {
                dispatch_events(state, connection_id, game_id, vec![event], tx).await?;
            }
        }
    }

    Ok(())
}

/// Replace the connection's session with a fresh game and announce its grid
pub(crate) async fn start_new_game(
    state: &Arc<AppState>,
    connection_id: Uuid,
    category: Option<&str>,
    rng: &mut StdRng,
    tx: &mpsc::Sender<ServerMessage>,
) -> anyhow::Result<()> {
    let entry = match category {
        Some(name) => state.lexicon.get(name)?,
        None => state.lexicon.random_entry(rng)?,
    };

    let session = GameSession::new(entry, &state.config.game, rng);
    let game_id = session.game_id();
    let ready = session.grid_ready();

    tracing::info!(
        "Connection {} started game {} ({}, {} words)",
        connection_id,
        game_id,
        session.category(),
        session.words().len()
    );

    state.sessions.insert(connection_id, session);
    dispatch_events(state, connection_id, game_id, vec![ready], tx).await
}

/// Run `f` against the connection's session without holding the map entry
/// across an await
fn with_session<T>(
    state: &AppState,
    connection_id: Uuid,
    f: impl FnOnce(&mut GameSession) -> T,
) -> Result<(Uuid, T), GameError> {
    let mut session = state
        .sessions
        .get_mut(&connection_id)
        .ok_or(GameError::NoActiveGame)?;
    let game_id = session.game_id();
    Ok((game_id, f(session.value_mut())))
}

/// Send events to the client, scheduling the transient ones
async fn dispatch_events(
    state: &Arc<AppState>,
    connection_id: Uuid,
    game_id: Uuid,
    events: Vec<GameEvent>,
    tx: &mpsc::Sender<ServerMessage>,
) -> anyhow::Result<()> {
    let game = &state.config.game;

    for event in events {
        if let Some(msg) = ServerMessage::immediate(&event) {
            tx.send(msg).await?;
        }

        match event {
            GameEvent::SelectionEnded { cells } => schedule(
                state,
                connection_id,
                game_id,
                game.selection_clear,
                ServerMessage::SelectionCleared { cells },
                tx,
            ),
            GameEvent::HintCell { position } => schedule(
                state,
                connection_id,
                game_id,
                game.hint_clear,
                ServerMessage::HintCleared { position },
                tx,
            ),
            GameEvent::AllWordsFound { elapsed_ms } => schedule(
                state,
                connection_id,
                game_id,
                game.completion_notice,
                ServerMessage::AllWordsFound { elapsed_ms },
                tx,
            ),
            _ => {}
        }
    }

    Ok(())
}

/// One-shot delayed send. Dropped if the connection has moved on to another
/// game or closed in the meantime.
fn schedule(
    state: &Arc<AppState>,
    connection_id: Uuid,
    game_id: Uuid,
    delay: Duration,
    msg: ServerMessage,
    tx: &mpsc::Sender<ServerMessage>,
) {
    let state = Arc::clone(state);
    let tx = tx.clone();

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let current = state.sessions.get(&connection_id).map(|s| s.game_id());
        if current != Some(game_id) {
            tracing::debug!("Dropping stale {:?} for game {}", msg, game_id);
            return;
        }

        let _ = tx.send(msg).await;
    });
}
