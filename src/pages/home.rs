//! Landing page pointing at the chamado chat.

use leptos::prelude::*;

/// Home page — the helpdesk proper lives in the backend; this only
/// orients whoever lands on the root route.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"UpDesk"</h1>
            <p>"Central de atendimento"</p>
            <p class="home-page__hint">"Abra um chamado para falar com o suporte."</p>
        </div>
    }
}
