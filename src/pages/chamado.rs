//! Chamado page hosting the chat widget.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::chat_panel::ChatPanel;
use crate::net::chat_sync::{ChatSyncHandle, SyncMode, resolve_mode, spawn_chat_sync};
use crate::state::chat::ChatState;

/// Chamado page — resolves the chamado id from the route and owns the
/// poll loop's lifecycle: spawned when a chamado is present, restarted
/// when the route changes, stopped on navigation away.
#[component]
pub fn ChamadoPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let params = use_params_map();

    let sync = RwSignal::new(ChatSyncHandle::disabled());
    provide_context(sync);

    let mode = Memo::new(move |_| resolve_mode(params.read().get("id").as_deref()));

    // (Re)start the poll loop whenever the chamado context changes.
    Effect::new(move || {
        let mode = mode.get();
        sync.get_untracked().stop();
        chat.set(ChatState::default());
        let next = match mode {
            SyncMode::Enabled { chamado_id } => spawn_chat_sync(chamado_id, chat),
            SyncMode::Disabled => ChatSyncHandle::disabled(),
        };
        sync.set(next);
    });

    on_cleanup(move || sync.get_untracked().stop());

    view! {
        <div class="chamado-page">
            <header class="chamado-page__header">
                <h1>"Atendimento"</h1>
                <span class="chamado-page__id">
                    {move || match mode.get() {
                        SyncMode::Enabled { chamado_id } => format!("Chamado #{chamado_id}"),
                        SyncMode::Disabled => "Sem chamado".to_owned(),
                    }}
                </span>
            </header>

            {move || match mode.get() {
                SyncMode::Enabled { chamado_id } => {
                    view! { <ChatPanel chamado_id=chamado_id/> }.into_any()
                }
                SyncMode::Disabled => {
                    view! {
                        <div class="chamado-page__disabled">"Nenhum chamado selecionado."</div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
