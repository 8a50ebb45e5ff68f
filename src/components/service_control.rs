//! Service Control Page
//!
//! Remote control of the MES host Windows service: status query plus
//! start/stop/restart triggers. Actions are fire-and-forget; the only
//! tracked outcome is the status string of the reply.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ServiceAction};

const SERVICE_NAME: &str = "MESHostService";

#[component]
fn ServiceStatusPanel(refresh: ReadSignal<u32>) -> impl IntoView {
    let (status, set_status) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let fetch_status = move || {
        set_loading.set(true);
        set_status.set(String::new());
        spawn_local(async move {
            match api::service_status(SERVICE_NAME).await {
                Ok(reply) => set_status.set(format!("✅ {}", reply.status)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[ServiceControl] service_status failed: {}", e).into(),
                    );
                    set_status.set("❌ Error".to_string());
                }
            }
            set_loading.set(false);
        });
    };

    // Completed actions bump the refresh counter to re-query
    Effect::new(move |_| {
        if refresh.get() > 0 {
            fetch_status();
        }
    });

    view! {
        <div class="service-status">
            <p>
                <strong>"Estado: "</strong>
                {move || status.get()}
            </p>
            <button disabled=move || loading.get() on:click=move |_| fetch_status()>
                {move || if loading.get() { "Cargando..." } else { "🔄 Obtener Estado" }}
            </button>
        </div>
    }
}

#[component]
fn ServiceActions(on_action_completed: WriteSignal<u32>) -> impl IntoView {
    let (busy, set_busy) = signal(None::<ServiceAction>);
    let (message, set_message) = signal(String::new());

    let run_action = move |action: ServiceAction| {
        set_busy.set(Some(action));
        set_message.set(String::new());
        spawn_local(async move {
            match api::service_action(action, SERVICE_NAME).await {
                Ok(reply) if reply.status == "success" => {
                    set_message.set(format!("✅ Servicio {} correctamente.", action.as_str()));
                    on_action_completed.update(|v| *v += 1);
                }
                Ok(reply) => {
                    set_message.set(format!(
                        "⚠️ Hubo un problema: {}",
                        reply.error.unwrap_or_default()
                    ));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[ServiceControl] {}_service failed: {}", action.as_str(), e).into(),
                    );
                    set_message.set(format!("❌ Error al {} el servicio.", action.as_str()));
                }
            }
            set_busy.set(None);
        });
    };

    let action_button = move |action: ServiceAction, idle: &'static str, working: &'static str| {
        view! {
            <button
                class="service-action-btn"
                disabled=move || busy.get() == Some(action)
                on:click=move |_| run_action(action)
            >
                {move || if busy.get() == Some(action) { working } else { idle }}
            </button>
        }
    };

    view! {
        <div class="service-actions">
            {action_button(ServiceAction::Restart, "🔄 Reiniciar", "Reiniciando...")}
            {action_button(ServiceAction::Start, "▶️ Iniciar", "Iniciando...")}
            {action_button(ServiceAction::Stop, "⏹️ Detener", "Deteniendo...")}
            {move || {
                let msg = message.get();
                (!msg.is_empty()).then(|| view! { <p class="service-message">{msg}</p> })
            }}
        </div>
    }
}

#[component]
pub fn ServiceControl() -> impl IntoView {
    let (refresh, set_refresh) = signal(0u32);

    view! {
        <div class="page service-control">
            <h1>"Panel de Control de Servicio MES"</h1>
            <div class="card">
                <h2>"Opciones de Administración"</h2>
                <ServiceStatusPanel refresh=refresh />
                <ServiceActions on_action_completed=set_refresh />
            </div>
        </div>
    }
}
