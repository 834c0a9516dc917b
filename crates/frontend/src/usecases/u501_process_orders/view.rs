use super::api;
use super::model::{selection_status, OrderUpload};
use crate::layout::global_context::use_global_context;
use crate::shared::api_utils::failure_message;
use crate::shared::config::use_app_config;
use crate::shared::dom_utils::selected_files;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::health::model::refresh_status;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_process_orders::{ProcessOrders, FAILURE_PREFIX, SUCCESS_MESSAGE};
use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn file_names(input: NodeRef<Input>) -> Vec<String> {
    input
        .get_untracked()
        .map(|el| selected_files(&el).iter().map(|f| f.name()).collect())
        .unwrap_or_default()
}

#[component]
fn FileField(
    id: &'static str,
    label: &'static str,
    hint: &'static str,
    multiple: bool,
    input_ref: NodeRef<Input>,
) -> impl IntoView {
    let (status_text, set_status_text) = signal(String::new());
    let (status_class, set_status_class) = signal("file-status");

    let on_change = move |_| {
        let (text, class) = selection_status(&file_names(input_ref));
        set_status_text.set(text);
        set_status_class.set(class);
    };

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="file"
                id=id
                name=id
                accept=".csv,.xlsx,.xls"
                multiple=multiple
                node_ref=input_ref
                on:change=on_change
            />
            <small>{hint}</small>
            <div id=format!("{}Status", id) class=move || status_class.get()>
                {move || status_text.get()}
            </div>
        </div>
    }
}

/// Upload form for the master mapping file and the marketplace order files.
#[component]
pub fn ProcessOrdersForm() -> impl IntoView {
    let ctx = use_global_context();
    let config = use_app_config();
    let toast = use_toast();

    let master_ref = NodeRef::<Input>::new();
    let orders_ref = NodeRef::<Input>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let master = master_ref
            .get_untracked()
            .and_then(|el| selected_files(&el).into_iter().next());
        let orders = orders_ref
            .get_untracked()
            .map(|el| selected_files(&el))
            .unwrap_or_default();

        let upload = match OrderUpload::new(master, orders) {
            Ok(upload) => upload,
            Err(e) => {
                log::warn!("{}: {}", ProcessOrders::full_name(), e);
                toast.error(e.to_string());
                return;
            }
        };

        log::info!(
            "{}: submitting {} order file(s)",
            ProcessOrders::full_name(),
            upload.order_files.len()
        );
        let ticket = ctx.begin_result_request();
        ctx.processing.set(true);
        let config = config.clone();

        spawn_local(async move {
            match api::process_orders(&config, upload).await {
                Ok(result) => {
                    // Inventory changed on the server either way; only the held result may be stale.
                    if ctx.apply_result(ticket, result) {
                        toast.success(SUCCESS_MESSAGE);
                    } else {
                        log::debug!("process-orders response {} superseded, result not shown", ticket);
                        toast.info(SUCCESS_MESSAGE);
                    }
                    refresh_status(ctx, config);
                }
                Err(e) => {
                    log::error!("Processing error: {}", e);
                    toast.error(failure_message(FAILURE_PREFIX, &e));
                }
            }
            ctx.processing.set(false);
        });
    };

    view! {
        <section class="upload-section">
            <h2>{icon("upload")} " " {ProcessOrders::display_name()}</h2>
            <form id="uploadForm" on:submit=on_submit>
                <FileField
                    id="masterFile"
                    label="Master Mapping File (optional)"
                    hint="Replaces the SKU to MSKU mappings loaded on the server"
                    multiple=false
                    input_ref=master_ref
                />
                <FileField
                    id="orderFiles"
                    label="Order Files"
                    hint="One or more marketplace order exports"
                    multiple=true
                    input_ref=orders_ref
                />
                <button
                    type="submit"
                    id="processBtn"
                    class="btn btn-primary"
                    prop:disabled=move || ctx.processing.get()
                >
                    "Process Orders"
                </button>
            </form>
        </section>
    }
}
