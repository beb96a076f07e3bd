use aquasite_engine::blocks::BlockId;
use aquasite_engine::editing::AssetSlot;
use aquasite_engine::upload::AssetFile;
use dioxus::prelude::*;

/// Files picked for one slot of one block.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub block_id: BlockId,
    pub slot: AssetSlot,
    pub files: Vec<AssetFile>,
}

/// File picker that reads the chosen files and hands them over in one batch.
/// Single-file slots only ever receive the first file.
#[component]
pub fn AssetInput(
    slot: AssetSlot,
    #[props(into)] label: String,
    #[props(default)] busy: bool,
    on_files: Callback<(AssetSlot, Vec<AssetFile>)>,
) -> Element {
    let multiple = slot.appends();
    rsx! {
        label {
            class: if busy { "asset-input busy" } else { "asset-input" },
            span { class: "asset-input-label", "{label}" }
            if busy {
                span { class: "asset-input-status", "Enviando…" }
            }
            input {
                r#type: "file",
                accept: "image/*,application/pdf",
                multiple,
                onchange: move |event: Event<FormData>| {
                    let files = event.files();
                    spawn(async move {
                        let mut assets = Vec::new();
                        for file in files {
                            let name = file.name();
                            match file.read_bytes().await {
                                Ok(bytes) => assets.push(AssetFile::from_name(name, bytes.to_vec())),
                                Err(e) => log::warn!("could not read {name}: {e}"),
                            }
                            if !multiple {
                                break;
                            }
                        }
                        if !assets.is_empty() {
                            on_files.call((slot, assets));
                        }
                    });
                },
            }
        }
    }
}
