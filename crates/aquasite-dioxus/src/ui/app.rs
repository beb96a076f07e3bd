use aquasite_engine::editing::{EditCmd, EditorSession, Notice, SaveState};
use aquasite_engine::render::{Surface, plan_page};
use aquasite_engine::store::{PageKind, PageStore};
use aquasite_engine::upload::upload_each;
use dioxus::prelude::*;
use futures::StreamExt;

use super::components::{
    BlockEditor, ErrorScreen, NoticeList, PreviewRenderer, ReaderModal, UploadRequest,
};
use crate::services::{Services, StoreBackend};

const AQUASITE_CSS: &str = include_str!("../assets/aquasite.css");

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[component]
pub fn App() -> Element {
    let services = use_context::<Services>();

    let mut page = use_signal(|| PageKind::Maricultura);
    let mut load = use_signal(|| LoadState::Loading);
    let mut session = use_signal(EditorSession::new);
    let mut notices = use_signal(Vec::<Notice>::new);
    let mut show_preview = use_signal(|| true);
    let mut reader_open = use_signal(|| false);

    use_hook({
        let store = services.store.clone();
        move || fetch_page(store, PageKind::Maricultura, page, session, load)
    });

    let open_page = use_callback({
        let store = services.store.clone();
        move |kind: PageKind| {
            if session.peek().is_dirty() {
                log::info!("leaving {} with unsaved changes", page.peek());
            }
            page.set(kind);
            load.set(LoadState::Loading);
            notices.write().clear();
            reader_open.set(false);
            fetch_page(store.clone(), kind, page, session, load);
        }
    });

    let on_command = use_callback(move |cmd: EditCmd| {
        let result = session.write().apply(cmd);
        match result {
            Ok(patch) => {
                if let Some(id) = patch.scroll_to {
                    scroll_into_view(&format!("block-{id}"));
                }
            }
            Err(e) => log::warn!("edit rejected: {e}"),
        }
    });

    let on_upload = use_callback({
        let uploader = services.uploader.clone();
        move |request: UploadRequest| {
            let UploadRequest {
                block_id,
                slot,
                files,
            } = request;
            let mut batch = Vec::with_capacity(files.len());
            for file in files {
                match session.write().begin_upload(&block_id, slot) {
                    Ok(ticket) => batch.push((ticket, file)),
                    Err(e) => {
                        log::warn!("cannot upload into block {block_id}: {e}");
                        return;
                    }
                }
            }
            let uploader = uploader.clone();
            spawn(async move {
                let mut results = upload_each(&uploader, batch);
                while let Some((ticket, result)) = results.next().await {
                    let outcome = session.write().complete_upload(ticket, result);
                    log::debug!("upload {ticket:?} finished: {outcome:?}");
                    drain_notices(session, notices);
                }
            });
        }
    });

    let on_save = use_callback({
        let store = services.store.clone();
        move |_: ()| {
            if session.peek().state() == SaveState::Saving {
                return;
            }
            let request = session.write().begin_save();
            let kind = *page.peek();
            let store = store.clone();
            spawn(async move {
                let result = store.save(kind, &request).await;
                if *page.peek() != kind {
                    log::warn!("save of {kind} finished after switching pages");
                    return;
                }
                session.write().finish_save(result);
                drain_notices(session, notices);
            });
        }
    });

    let current = page();
    let load_state = load();
    let state = session.read().state();
    let dirty = session.read().is_dirty();
    let pending = session.read().pending_uploads();
    let title = session.read().content().title.clone();
    let subtitle = session.read().content().subtitle.clone();
    let blocks = session.read().blocks().to_vec();
    let uploading = {
        let session = session.read();
        session
            .blocks()
            .iter()
            .filter(|block| session.is_uploading(&block.id))
            .map(|block| block.id.clone())
            .collect::<Vec<_>>()
    };
    let status = save_status(state, dirty);

    rsx! {
        style { {AQUASITE_CSS} }
        div {
            class: "app-container",
            nav {
                class: "page-tabs",
                for kind in PageKind::ALL {
                    button {
                        key: "{kind}",
                        class: if kind == current { "page-tab active" } else { "page-tab" },
                        onclick: move |_| open_page.call(kind),
                        {kind.title()}
                    }
                }
            }
            NoticeList {
                notices: notices(),
                on_dismiss: move |index: usize| {
                    let mut notices = notices.write();
                    if index < notices.len() {
                        notices.remove(index);
                    }
                },
            }
            {match load_state {
                LoadState::Loading => rsx! {
                    p { class: "loading", "Carregando…" }
                },
                LoadState::Failed(details) => rsx! {
                    ErrorScreen {
                        title: "Erro".to_string(),
                        message: format!("Não foi possível carregar a página {}.", current.title()),
                        details: Some(details),
                        on_retry: Some(Callback::new(move |_| open_page.call(current))),
                    }
                },
                LoadState::Ready => rsx! {
                    div {
                        class: "toolbar",
                        button {
                            class: "save-button",
                            disabled: state == SaveState::Saving,
                            onclick: move |_| on_save.call(()),
                            "Salvar"
                        }
                        span {
                            class: if dirty { "save-status dirty" } else { "save-status" },
                            "{status}"
                        }
                        if pending > 0 {
                            span { class: "upload-status", "Enviando {pending} arquivo(s)…" }
                        }
                        label {
                            class: "preview-toggle",
                            input {
                                r#type: "checkbox",
                                checked: show_preview(),
                                onchange: move |_| show_preview.toggle(),
                            }
                            "Pré-visualização"
                        }
                        button {
                            class: "reader-button",
                            onclick: move |_| reader_open.set(true),
                            "Ver como visitante"
                        }
                    }
                    div {
                        class: "workspace",
                        div {
                            class: "editor-pane",
                            label {
                                class: "field",
                                span { class: "field-label", "Título da página" }
                                input {
                                    r#type: "text",
                                    value: "{title}",
                                    oninput: move |event: Event<FormData>| {
                                        on_command.call(EditCmd::SetTitle { title: event.value() });
                                    },
                                }
                            }
                            label {
                                class: "field",
                                span { class: "field-label", "Subtítulo" }
                                input {
                                    r#type: "text",
                                    value: "{subtitle}",
                                    oninput: move |event: Event<FormData>| {
                                        on_command.call(EditCmd::SetSubtitle { subtitle: event.value() });
                                    },
                                }
                            }
                            BlockEditor {
                                blocks,
                                uploading,
                                on_command,
                                on_upload,
                            }
                        }
                        if show_preview() {
                            PreviewRenderer {
                                plan: plan_page(session.read().content(), Surface::Preview),
                            }
                        }
                    }
                    if reader_open() {
                        ReaderModal {
                            plan: plan_page(session.read().content(), Surface::Reader),
                            on_close: move |_| reader_open.set(false),
                        }
                    }
                },
            }}
        }
    }
}

/// Load `kind` into a fresh session. A result for a page the author already
/// left is dropped.
fn fetch_page(
    store: StoreBackend,
    kind: PageKind,
    page: Signal<PageKind>,
    mut session: Signal<EditorSession>,
    mut load: Signal<LoadState>,
) {
    spawn(async move {
        let result = store.load(kind).await;
        if *page.peek() != kind {
            log::debug!("discarding load of {kind}, page changed meanwhile");
            return;
        }
        match result {
            Ok(record) => {
                log::info!("loaded {kind} with {} blocks", record.content.blocks.len());
                session.set(EditorSession::from_record(record));
                load.set(LoadState::Ready);
            }
            Err(e) => {
                log::error!("failed to load {kind}: {e}");
                load.set(LoadState::Failed(e.to_string()));
            }
        }
    });
}

fn drain_notices(mut session: Signal<EditorSession>, mut notices: Signal<Vec<Notice>>) {
    let drained = session.write().take_notices();
    if !drained.is_empty() {
        notices.write().extend(drained);
    }
}

fn scroll_into_view(dom_id: &str) {
    // The new card is only in the DOM after the next render.
    let script = format!(
        "setTimeout(() => document.getElementById({dom_id:?})?.scrollIntoView({{ behavior: 'smooth', block: 'center' }}), 50);"
    );
    let _ = document::eval(&script);
}

fn save_status(state: SaveState, dirty: bool) -> &'static str {
    match state {
        SaveState::Saving => "Salvando…",
        SaveState::SaveFailed => "Falha ao salvar",
        _ if dirty => "Alterações não salvas",
        SaveState::Saved => "Salvo",
        SaveState::Loaded | SaveState::Editing => "",
    }
}
