//! Chat panel for a chamado: transcript pane plus the send form.

use leptos::prelude::*;

use crate::net::chat_sync::{ChatSyncHandle, prepare_outgoing};
use crate::state::chat::{Authorship, ChatState, Feed};
use crate::state::session::SessionState;

/// Transcript pane with placeholder states, plus an input row for
/// sending new messages.
///
/// Rendering is a full replace of the pane on every feed change; after
/// each render the pane is scrolled to its maximum offset so the latest
/// message stays visible.
#[component]
pub fn ChatPanel(chamado_id: i64) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let sync = expect_context::<RwSignal<ChatSyncHandle>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(texto) = prepare_outgoing(&input.get()) else {
            return;
        };
        let sync = sync.get_untracked();
        leptos::task::spawn_local(async move {
            match crate::net::api::enviar_mensagem(chamado_id, &texto).await {
                Ok(()) => {
                    input.set(String::new());
                    sync.request_refresh();
                }
                Err(e) => {
                    leptos::logging::warn!("envio para o chamado {chamado_id} falhou: {e}");
                    crate::util::page_context::alert(
                        "Não foi possível enviar sua mensagem. Tente novamente.",
                    );
                }
            }
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let viewer = session.get().usuario_id;
                    match chat.get().feed {
                        Feed::Loading => {
                            view! {
                                <div class="chat-panel__empty">"Carregando mensagens..."</div>
                            }
                                .into_any()
                        }
                        Feed::Failed => {
                            view! {
                                <div class="chat-panel__error">
                                    "Não foi possível carregar as mensagens."
                                </div>
                            }
                                .into_any()
                        }
                        Feed::Ready(list) if list.is_empty() => {
                            view! {
                                <div class="chat-panel__empty">"Nenhuma mensagem ainda."</div>
                            }
                                .into_any()
                        }
                        Feed::Ready(list) => {
                            list.iter()
                                .map(|msg| {
                                    let mine = msg.authorship(viewer) == Authorship::Mine;
                                    let nome = msg.usuario_nome.clone();
                                    let texto = msg.mensagem.clone();
                                    let data = msg.data_criacao.clone();
                                    let origem = msg.origem.clone();
                                    view! {
                                        <div
                                            class="chat-panel__message"
                                            class:chat-panel__message--mine=mine
                                        >
                                            <span class="chat-panel__author">{nome}</span>
                                            <span class="chat-panel__text">{texto}</span>
                                            <span class="chat-panel__meta">
                                                {data}
                                                {origem
                                                    .map(|o| {
                                                        view! {
                                                            <span class="chat-panel__origem">{o}</span>
                                                        }
                                                    })}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Digite sua mensagem..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Enviar"
                </button>
            </div>
        </div>
    }
}
