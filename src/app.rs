//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{chamado::ChamadoPage, home::HomePage};
use crate::state::{chat::ChatState, session::SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(session);
    provide_context(chat);

    // Capture the viewer identity the hosting page stamped on <body>.
    Effect::new(move || {
        session.update(|s| s.usuario_id = crate::util::page_context::read_usuario_id());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/updesk-client.css"/>
        <Title text="UpDesk"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("chamados"), ParamSegment("id")) view=ChamadoPage/>
            </Routes>
        </Router>
    }
}
